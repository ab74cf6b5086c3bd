use indexmap::IndexMap;

use super::inputs::UserInputs;
use super::matcher::Matcher;
use crate::catalog::{Catalog, Plan};

/// Index of the first plan, in catalog order, that matches the inputs
///
/// This is not a search for the cheapest plan: catalog order is the
/// recommendation order.
pub fn select_first_match(plans: &[Plan], inputs: &UserInputs, matcher: &Matcher) -> Option<usize> {
    plans.iter().position(|plan| matcher.matches(plan, inputs))
}

/// First matching plan index for every platform, keyed like the catalog
pub fn select_for_catalog(
    catalog: &Catalog,
    inputs: &UserInputs,
    matcher: &Matcher,
) -> IndexMap<String, Option<usize>> {
    catalog
        .platforms()
        .map(|(key, platform)| {
            (key.to_string(), select_first_match(&platform.plans, inputs, matcher))
        })
        .collect()
}
