use anyhow::Result;
use colored::Colorize;
use plan_compare::{
    config::Config,
    matching::{normalize, Dimension, MatchReport},
    presentation::render_matched,
    Catalog, FormInput, Matcher, UserInputs,
};
use tracing::{info, warn};

use super::{load_catalog, render};
use crate::cli::MatchArgs;

/// Execute the match command
///
/// Highlights the first plan per platform that fits the given usage
pub async fn execute(cfg: &Config, args: &MatchArgs) -> Result<()> {
    let catalog = load_catalog(cfg, args.catalog.catalog.as_deref()).await?;

    let matcher = Matcher::new(args.policy.unwrap_or(cfg.matching.policy));
    let inputs = UserInputs::from_form(&form_from_args(args));
    warn_on_degraded(&inputs);

    info!(
        policy = %matcher.policy(),
        pdf_count = inputs.pdf_count,
        "Matching plans"
    );

    let view = render_matched(&catalog, &inputs, &matcher);

    if args.catalog.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!(
        "{} {} document(s), {} files, {} page count, ad-free {} ({} policy)",
        "Requirements:".bold(),
        inputs.pdf_count,
        inputs.file_size,
        inputs.page_count,
        if inputs.ad_free { "required" } else { "optional" },
        matcher.policy()
    );
    println!();

    for platform in &view.platforms {
        let reports = args
            .explain
            .then(|| platform_reports(&catalog, &platform.key, &inputs, &matcher));
        render::print_platform(platform, true, reports.as_deref());
    }

    let matched = view.platforms.iter().filter(|p| p.highlighted.is_some()).count();
    println!(
        "{}",
        format!("{} of {} platform(s) have a fitting plan", matched, view.platforms.len()).green()
    );

    Ok(())
}

fn form_from_args(args: &MatchArgs) -> FormInput {
    FormInput {
        pdf_count: args.pdf_count.clone(),
        file_size: args.file_size.clone(),
        page_count: args.page_count.clone(),
        ad_free: args.ad_free,
    }
}

fn platform_reports(
    catalog: &Catalog,
    key: &str,
    inputs: &UserInputs,
    matcher: &Matcher,
) -> Vec<MatchReport> {
    catalog
        .get(key)
        .map(|platform| {
            platform
                .plans
                .iter()
                .map(|plan| matcher.evaluate(plan, inputs))
                .collect()
        })
        .unwrap_or_default()
}

/// Unknown categories are accepted but compare as 0; tell the user
fn warn_on_degraded(inputs: &UserInputs) {
    if normalize(inputs.file_size, Dimension::FileSize).is_degraded() {
        warn!("Unrecognized file size category; comparing as 0");
        eprintln!(
            "{}",
            "⚠ Unrecognized file size; expected small, medium or large".yellow()
        );
    }
    if normalize(inputs.page_count, Dimension::PageCount).is_degraded() {
        warn!("Unrecognized page count category; comparing as 0");
        eprintln!(
            "{}",
            "⚠ Unrecognized page count; expected small, medium or large".yellow()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CatalogArgs;
    use plan_compare::{Category, MatchPolicy};

    fn args() -> MatchArgs {
        MatchArgs {
            catalog: CatalogArgs::default(),
            pdf_count: "oops".to_string(),
            file_size: "medium".to_string(),
            page_count: "large".to_string(),
            ad_free: true,
            policy: Some(MatchPolicy::Ordinal),
            explain: false,
        }
    }

    #[test]
    fn test_form_from_args_recovers_pdf_count() {
        let inputs = UserInputs::from_form(&form_from_args(&args()));
        assert_eq!(inputs.pdf_count, 1);
        assert_eq!(inputs.file_size, Category::Medium);
        assert_eq!(inputs.page_count, Category::Large);
        assert!(inputs.ad_free);
    }

    #[test]
    fn test_platform_reports_follow_plan_order() {
        let catalog = Catalog::from_json_str(
            r#"{"p": {"name": "P", "plans": [
                {"name": "Tiny", "maxPdfs": 1},
                {"name": "Big", "maxPdfs": 100}
            ]}}"#,
        )
        .unwrap();
        let inputs = UserInputs::new(10, Category::Small, Category::Small, false);

        let reports = platform_reports(&catalog, "p", &inputs, &Matcher::default());
        assert_eq!(reports.len(), 2);
        assert!(!reports[0].is_match());
        assert!(reports[1].is_match());

        assert!(platform_reports(&catalog, "missing", &inputs, &Matcher::default()).is_empty());
    }
}
