//! Category normalization
//!
//! Turns the user-facing `small` / `medium` / `large` labels into numeric proxy
//! values that can be compared against plan ceilings. The values are
//! representative comparison points, not exact bounds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// File-size proxies in MB
pub const FILE_SIZE_SMALL_MB: u64 = 10;
pub const FILE_SIZE_MEDIUM_MB: u64 = 50;
pub const FILE_SIZE_LARGE_MB: u64 = 100;

/// Page-count proxies
pub const PAGES_SMALL: u64 = 10;
pub const PAGES_MEDIUM: u64 = 100;
pub const PAGES_LARGE: u64 = 500;

/// A size or page-count category label
///
/// Parsing never fails: anything outside the closed set becomes
/// `Unrecognized`, which normalizes to [`Normalized::Degraded`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Small,
    Medium,
    Large,
    Unrecognized,
}

impl Category {
    /// Parse a label, ignoring case and surrounding whitespace
    pub fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "small" => Category::Small,
            "medium" => Category::Medium,
            "large" => Category::Large,
            _ => Category::Unrecognized,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Small => "small",
            Category::Medium => "medium",
            Category::Large => "large",
            Category::Unrecognized => "unrecognized",
        }
    }

    /// Position in the small < medium < large ordering
    pub fn rank(&self) -> Option<u8> {
        match self {
            Category::Small => Some(1),
            Category::Medium => Some(2),
            Category::Large => Some(3),
            Category::Unrecognized => None,
        }
    }

    pub fn is_recognized(&self) -> bool {
        self.rank().is_some()
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Category::parse(label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which proxy table a category is normalized against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    FileSize,
    PageCount,
}

/// Outcome of normalizing a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalized {
    /// A recognized category and its proxy value
    Value(u64),
    /// The label was not recognized; compares as 0
    Degraded,
}

impl Normalized {
    /// Numeric value used in ceiling comparisons
    pub fn value(self) -> u64 {
        match self {
            Normalized::Value(value) => value,
            Normalized::Degraded => 0,
        }
    }

    pub fn is_degraded(self) -> bool {
        matches!(self, Normalized::Degraded)
    }
}

/// Normalize a category in the given dimension
pub fn normalize(category: Category, dimension: Dimension) -> Normalized {
    let value = match (dimension, category) {
        (_, Category::Unrecognized) => return Normalized::Degraded,
        (Dimension::FileSize, Category::Small) => FILE_SIZE_SMALL_MB,
        (Dimension::FileSize, Category::Medium) => FILE_SIZE_MEDIUM_MB,
        (Dimension::FileSize, Category::Large) => FILE_SIZE_LARGE_MB,
        (Dimension::PageCount, Category::Small) => PAGES_SMALL,
        (Dimension::PageCount, Category::Medium) => PAGES_MEDIUM,
        (Dimension::PageCount, Category::Large) => PAGES_LARGE,
    };

    Normalized::Value(value)
}

/// Shorthand for `normalize(Category::parse(label), dimension)`
pub fn normalize_label(label: &str, dimension: Dimension) -> Normalized {
    normalize(Category::parse(label), dimension)
}
