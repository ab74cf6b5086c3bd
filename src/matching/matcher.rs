use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::inputs::UserInputs;
use super::normalizer::{normalize, Category, Dimension};
use crate::catalog::{Ceiling, Plan};
use crate::error::AppError;

/// How plan ceilings are compared against user requirements
///
/// Exactly one policy is active per deployment; the two produce different
/// results for identical-looking catalogs and are never mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    /// Numeric ceilings, `null` meaning unlimited
    #[default]
    Threshold,
    /// Category ceilings, page counts compared through a containment matrix
    Ordinal,
}

impl MatchPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchPolicy::Threshold => "threshold",
            MatchPolicy::Ordinal => "ordinal",
        }
    }
}

impl std::str::FromStr for MatchPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "threshold" => Ok(MatchPolicy::Threshold),
            "ordinal" => Ok(MatchPolicy::Ordinal),
            _ => Err(AppError::ConfigError(format!("Invalid match policy: {}", s))),
        }
    }
}

// Config files and environment variables accept the same spellings as the CLI
impl<'de> Deserialize<'de> for MatchPolicy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-condition outcome of matching one plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    pub pdf_count: bool,
    pub file_size: bool,
    pub page_count: bool,
    pub ad_free: bool,
}

impl MatchReport {
    /// All four conditions hold
    pub fn is_match(&self) -> bool {
        self.pdf_count && self.file_size && self.page_count && self.ad_free
    }
}

/// Decides whether a plan satisfies a set of user inputs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Matcher {
    policy: MatchPolicy,
}

impl Matcher {
    pub fn new(policy: MatchPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Evaluate every condition separately
    pub fn evaluate(&self, plan: &Plan, inputs: &UserInputs) -> MatchReport {
        let page_count = match self.policy {
            MatchPolicy::Threshold => {
                covers_amount(plan.max_pages.as_ref(), inputs.page_count, Dimension::PageCount)
            }
            MatchPolicy::Ordinal => covers_page_category(plan.max_pages.as_ref(), inputs.page_count),
        };

        MatchReport {
            pdf_count: plan.max_pdfs.map_or(true, |max| max >= inputs.pdf_count as f64),
            file_size: covers_amount(plan.max_file_size.as_ref(), inputs.file_size, Dimension::FileSize),
            page_count,
            ad_free: !inputs.ad_free || plan.ad_free,
        }
    }

    pub fn matches(&self, plan: &Plan, inputs: &UserInputs) -> bool {
        self.evaluate(plan, inputs).is_match()
    }
}

/// Ceiling comparison on normalized values; `None` is unlimited
///
/// A labelled ceiling is normalized in the same dimension as the user's
/// category. A degraded user category compares as 0.
fn covers_amount(ceiling: Option<&Ceiling>, requested: Category, dimension: Dimension) -> bool {
    ceiling.map_or(true, |ceiling| {
        ceiling.limit(dimension) >= normalize(requested, dimension).value() as f64
    })
}

/// Page-count containment: small ⊂ medium ⊂ large
///
/// An unrecognized category on either side covers nothing. Numeric ceilings
/// fall back to comparing against the normalized page value.
fn covers_page_category(ceiling: Option<&Ceiling>, requested: Category) -> bool {
    let Some(offered) = ceiling.and_then(Ceiling::category) else {
        return covers_amount(ceiling, requested, Dimension::PageCount);
    };

    match (offered.rank(), requested.rank()) {
        (Some(offered), Some(needed)) => offered >= needed,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(
        max_pdfs: Option<f64>,
        max_file_size: Option<Ceiling>,
        max_pages: Option<Ceiling>,
        ad_free: bool,
    ) -> Plan {
        Plan {
            name: "Test".to_string(),
            price: "$1".to_string(),
            features: String::new(),
            max_pdfs,
            max_file_size,
            max_pages,
            ad_free,
        }
    }

    fn label(s: &str) -> Option<Ceiling> {
        Some(Ceiling::Category(s.to_string()))
    }

    #[test]
    fn test_threshold_scenario_matches() {
        let inputs = UserInputs::new(5, Category::Small, Category::Medium, false);
        let plan = plan(Some(10.0), None, Some(Ceiling::Amount(500.0)), false);
        assert!(Matcher::new(MatchPolicy::Threshold).matches(&plan, &inputs));
    }

    #[test]
    fn test_threshold_ad_free_required() {
        let inputs = UserInputs::new(1, Category::Small, Category::Small, true);
        let plan = plan(None, None, None, false);
        let report = Matcher::new(MatchPolicy::Threshold).evaluate(&plan, &inputs);
        assert!(report.pdf_count && report.file_size && report.page_count);
        assert!(!report.ad_free);
        assert!(!report.is_match());
    }

    #[test]
    fn test_threshold_ceiling_below_request() {
        let inputs = UserInputs::new(5, Category::Large, Category::Small, false);
        let plan = plan(Some(10.0), Some(Ceiling::Amount(50.0)), None, false);
        let report = Matcher::new(MatchPolicy::Threshold).evaluate(&plan, &inputs);
        assert!(report.pdf_count);
        assert!(!report.file_size);
    }

    #[test]
    fn test_threshold_pdf_ceiling_is_inclusive() {
        let matcher = Matcher::new(MatchPolicy::Threshold);
        let plan = plan(Some(5.0), None, None, false);
        assert!(matcher.matches(&plan, &UserInputs::new(5, Category::Small, Category::Small, false)));
        assert!(!matcher.matches(&plan, &UserInputs::new(6, Category::Small, Category::Small, false)));
    }

    #[test]
    fn test_threshold_labelled_ceiling_is_normalized() {
        let inputs = UserInputs::new(1, Category::Medium, Category::Small, false);
        let matcher = Matcher::new(MatchPolicy::Threshold);
        assert!(matcher.matches(&plan(None, label("medium"), None, false), &inputs));
        assert!(!matcher.matches(&plan(None, label("small"), None, false), &inputs));
    }

    #[test]
    fn test_degraded_user_category_compares_as_zero() {
        let inputs = UserInputs::new(1, Category::Unrecognized, Category::Small, false);
        let matcher = Matcher::new(MatchPolicy::Threshold);
        assert!(matcher.matches(&plan(None, Some(Ceiling::Amount(0.0)), None, false), &inputs));
    }

    #[test]
    fn test_ordinal_medium_covers_small_pages() {
        let inputs = UserInputs::new(3, Category::Small, Category::Small, false);
        let report = Matcher::new(MatchPolicy::Ordinal)
            .evaluate(&plan(Some(5.0), label("small"), label("medium"), false), &inputs);
        assert!(report.page_count);
        assert!(report.is_match());
    }

    #[test]
    fn test_ordinal_page_matrix() {
        let matcher = Matcher::new(MatchPolicy::Ordinal);
        let cases = [
            ("small", Category::Small, true),
            ("small", Category::Medium, false),
            ("small", Category::Large, false),
            ("medium", Category::Small, true),
            ("medium", Category::Medium, true),
            ("medium", Category::Large, false),
            ("large", Category::Small, true),
            ("large", Category::Medium, true),
            ("large", Category::Large, true),
        ];

        for (offered, requested, expected) in cases {
            let inputs = UserInputs::new(1, Category::Small, requested, false);
            let report = matcher.evaluate(&plan(None, None, label(offered), false), &inputs);
            assert_eq!(
                report.page_count, expected,
                "plan {} vs user {}",
                offered, requested
            );
        }
    }

    #[test]
    fn test_ordinal_unrecognized_page_request_fails() {
        let inputs = UserInputs::new(1, Category::Small, Category::Unrecognized, false);
        let report = Matcher::new(MatchPolicy::Ordinal)
            .evaluate(&plan(None, None, label("large"), false), &inputs);
        assert!(!report.page_count);
    }

    #[test]
    fn test_ordinal_file_size_uses_normalized_categories() {
        let matcher = Matcher::new(MatchPolicy::Ordinal);
        let inputs = UserInputs::new(1, Category::Large, Category::Small, false);
        assert!(!matcher.matches(&plan(None, label("medium"), None, false), &inputs));
        assert!(matcher.matches(&plan(None, label("large"), None, false), &inputs));
    }

    #[test]
    fn test_ordinal_pdf_count_is_raw() {
        let matcher = Matcher::new(MatchPolicy::Ordinal);
        let plan = plan(Some(3.0), None, None, false);
        assert!(matcher.matches(&plan, &UserInputs::new(3, Category::Small, Category::Small, false)));
        assert!(!matcher.matches(&plan, &UserInputs::new(4, Category::Small, Category::Small, false)));
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("Ordinal".parse::<MatchPolicy>().unwrap(), MatchPolicy::Ordinal);
        assert_eq!("threshold".parse::<MatchPolicy>().unwrap(), MatchPolicy::Threshold);
        assert!("scoring".parse::<MatchPolicy>().is_err());
    }

    #[test]
    fn test_policy_deserialize_ignores_case() {
        let policy: MatchPolicy = serde_json::from_str(r#""Ordinal""#).unwrap();
        assert_eq!(policy, MatchPolicy::Ordinal);
        let policy: MatchPolicy = serde_json::from_str(r#""THRESHOLD""#).unwrap();
        assert_eq!(policy, MatchPolicy::Threshold);
        assert!(serde_json::from_str::<MatchPolicy>(r#""scoring""#).is_err());
        assert_eq!(serde_json::to_string(&MatchPolicy::Ordinal).unwrap(), r#""ordinal""#);
    }

    #[test]
    fn test_fractional_ceilings() {
        let matcher = Matcher::new(MatchPolicy::Threshold);
        let inputs = UserInputs::new(10, Category::Small, Category::Small, false);

        // 1.5 MB is below the 10 MB small file size
        let tight = plan(Some(10.0), Some(Ceiling::Amount(1.5)), None, false);
        let report = matcher.evaluate(&tight, &inputs);
        assert!(report.pdf_count);
        assert!(!report.file_size);

        let roomy = plan(Some(10.0), Some(Ceiling::Amount(10.5)), Some(Ceiling::Amount(9.9)), false);
        let report = matcher.evaluate(&roomy, &inputs);
        assert!(report.file_size);
        assert!(!report.page_count);

        assert!(!matcher.matches(&plan(Some(9.5), None, None, false), &inputs));
    }
}
