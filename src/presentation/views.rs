use serde::Serialize;

use crate::catalog::{Catalog, Platform};
use crate::matching::{select_first_match, MatchPolicy, Matcher, UserInputs};

/// A plan card
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanView {
    pub name: String,
    pub price: String,
    pub features: String,
    pub highlighted: bool,
}

/// A platform card with its plans in catalog order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformView {
    pub key: String,
    pub name: String,
    pub color: String,
    pub highlighted: Option<usize>,
    pub plans: Vec<PlanView>,
}

impl PlatformView {
    fn build(key: &str, platform: &Platform, highlighted: Option<usize>) -> Self {
        let plans = platform
            .plans
            .iter()
            .enumerate()
            .map(|(index, plan)| PlanView {
                name: plan.name.clone(),
                price: plan.price.clone(),
                features: plan.features.clone(),
                highlighted: highlighted == Some(index),
            })
            .collect();

        Self {
            key: key.to_string(),
            name: platform.name.clone(),
            color: platform.color.clone(),
            highlighted,
            plans,
        }
    }

    /// The highlighted plan card, if any
    pub fn highlighted_plan(&self) -> Option<&PlanView> {
        self.highlighted.and_then(|index| self.plans.get(index))
    }
}

/// Everything the widget needs to draw one result section
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonView {
    /// Policy used for highlighting; `None` for the unhighlighted view
    pub policy: Option<MatchPolicy>,
    pub platforms: Vec<PlatformView>,
}

/// All platforms and plans, nothing highlighted
pub fn render_all(catalog: &Catalog) -> ComparisonView {
    ComparisonView {
        policy: None,
        platforms: catalog
            .platforms()
            .map(|(key, platform)| PlatformView::build(key, platform, None))
            .collect(),
    }
}

/// All platforms and plans, with the first match per platform highlighted
pub fn render_matched(catalog: &Catalog, inputs: &UserInputs, matcher: &Matcher) -> ComparisonView {
    ComparisonView {
        policy: Some(matcher.policy()),
        platforms: catalog
            .platforms()
            .map(|(key, platform)| {
                let highlighted = select_first_match(&platform.plans, inputs, matcher);
                PlatformView::build(key, platform, highlighted)
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::Category;

    fn catalog() -> Catalog {
        Catalog::from_json_str(
            r##"{
                "alpha": {"name": "Alpha", "color": "#111", "plans": [
                    {"name": "Free", "price": "$0", "maxPdfs": 1},
                    {"name": "Plus", "price": "$5", "maxPdfs": 20},
                    {"name": "Max", "price": "$9", "maxPdfs": null}
                ]},
                "beta": {"name": "Beta", "color": "#222", "plans": [
                    {"name": "Only", "price": "$3", "maxPdfs": 2}
                ]}
            }"##,
        )
        .unwrap()
    }

    #[test]
    fn test_render_all_has_no_highlight() {
        let view = render_all(&catalog());
        assert_eq!(view.policy, None);
        assert_eq!(view.platforms.len(), 2);
        assert!(view
            .platforms
            .iter()
            .all(|p| p.highlighted.is_none() && p.plans.iter().all(|plan| !plan.highlighted)));
    }

    #[test]
    fn test_render_matched_highlights_single_plan() {
        let inputs = UserInputs::new(5, Category::Small, Category::Small, false);
        let view = render_matched(&catalog(), &inputs, &Matcher::default());

        let alpha = &view.platforms[0];
        assert_eq!(alpha.key, "alpha");
        assert_eq!(alpha.highlighted, Some(1));
        assert_eq!(alpha.highlighted_plan().map(|p| p.name.as_str()), Some("Plus"));
        assert_eq!(alpha.plans.iter().filter(|p| p.highlighted).count(), 1);

        let beta = &view.platforms[1];
        assert_eq!(beta.highlighted, None);
        assert!(beta.highlighted_plan().is_none());
    }

    #[test]
    fn test_view_serializes_camel_case() {
        let inputs = UserInputs::new(1, Category::Small, Category::Small, false);
        let view = render_matched(&catalog(), &inputs, &Matcher::default());
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["policy"], "threshold");
        assert_eq!(json["platforms"][0]["highlighted"], 0);
        assert_eq!(json["platforms"][0]["plans"][0]["highlighted"], true);
    }
}
