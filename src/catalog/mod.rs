//! Pricing catalog model
//!
//! A catalog maps platform keys to platforms, each holding an ordered list of
//! plans. Both orders are significant and are preserved exactly as they appear
//! in the source document: platform order drives rendering and plan order
//! decides which plan gets highlighted.

pub mod loader;
pub mod state;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::matching::normalizer::{normalize_label, Category, Dimension};

pub use loader::{CatalogLoader, CatalogSource};
pub use state::CatalogState;

/// Errors raised while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to fetch catalog from {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("catalog request to {url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid catalog: {0}")]
    Invalid(String),
}

/// A plan limit
///
/// Catalogs express ceilings either as plain amounts (MB, pages) or as
/// category labels; `null` in the document means unlimited and is modelled as
/// `None` on the plan. Amounts may be fractional (`1.5` MB).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ceiling {
    Amount(f64),
    Category(String),
}

impl Ceiling {
    /// The category for a labelled ceiling
    pub fn category(&self) -> Option<Category> {
        match self {
            Ceiling::Amount(_) => None,
            Ceiling::Category(label) => Some(Category::parse(label)),
        }
    }

    /// The comparable limit in `dimension`
    ///
    /// Labels are normalized; an unknown label limits to 0.
    pub fn limit(&self, dimension: Dimension) -> f64 {
        match self {
            Ceiling::Amount(amount) => *amount,
            Ceiling::Category(label) => normalize_label(label, dimension).value() as f64,
        }
    }
}

/// One pricing tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub name: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub features: String,
    #[serde(default)]
    pub max_pdfs: Option<f64>,
    #[serde(default)]
    pub max_file_size: Option<Ceiling>,
    #[serde(default)]
    pub max_pages: Option<Ceiling>,
    #[serde(default)]
    pub ad_free: bool,
}

/// A provider and its plans in recommendation order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub name: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub plans: Vec<Plan>,
}

/// Platforms keyed by their catalog key, in document order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    platforms: IndexMap<String, Platform>,
}

impl Catalog {
    /// Parse and validate a catalog document
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_slice(bytes)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_json_str(text: &str) -> Result<Self, CatalogError> {
        Self::from_json_slice(text.as_bytes())
    }

    /// Iterate platforms in catalog order
    pub fn platforms(&self) -> impl Iterator<Item = (&str, &Platform)> {
        self.platforms.iter().map(|(key, platform)| (key.as_str(), platform))
    }

    pub fn get(&self, key: &str) -> Option<&Platform> {
        self.platforms.get(key)
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    pub fn plan_count(&self) -> usize {
        self.platforms.values().map(|p| p.plans.len()).sum()
    }

    /// Check the shape of every plan
    ///
    /// Labelled ceilings must use a known category and every plan needs a
    /// name. Amounts and `null` are always accepted.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for (key, platform) in &self.platforms {
            for (index, plan) in platform.plans.iter().enumerate() {
                if plan.name.trim().is_empty() {
                    return Err(CatalogError::Invalid(format!(
                        "platform '{}' plan #{} has an empty name",
                        key, index
                    )));
                }

                let ceilings = [
                    ("maxFileSize", &plan.max_file_size),
                    ("maxPages", &plan.max_pages),
                ];
                for (field, ceiling) in ceilings {
                    let Some(ceiling @ Ceiling::Category(label)) = ceiling else {
                        continue;
                    };
                    if !ceiling.category().is_some_and(|c| c.is_recognized()) {
                        return Err(CatalogError::Invalid(format!(
                            "platform '{}' plan '{}' has unknown {} category '{}'",
                            key, plan.name, field, label
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}
