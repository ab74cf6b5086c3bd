//! Terminal rendering of plan cards

use colored::{ColoredString, Colorize};
use plan_compare::matching::MatchReport;
use plan_compare::presentation::{ComparisonView, PlatformView};

/// Print every platform card in catalog order
pub fn print_comparison(view: &ComparisonView) {
    if view.platforms.is_empty() {
        println!("{}", "No platforms in catalog".yellow());
        return;
    }

    for platform in &view.platforms {
        print_platform(platform, view.policy.is_some(), None);
    }
}

/// Print one platform card, optionally with per-plan match reports
pub fn print_platform(platform: &PlatformView, matched: bool, reports: Option<&[MatchReport]>) {
    println!("{}", platform_header(platform));

    for (index, plan) in platform.plans.iter().enumerate() {
        let marker = if plan.highlighted { "★".green().bold() } else { " ".normal() };
        let name = if plan.highlighted {
            plan.name.green().bold()
        } else {
            plan.name.normal()
        };

        println!("  {} {} {}", marker, name, plan.price.cyan());
        if !plan.features.is_empty() {
            println!("      {}", plan.features.dimmed());
        }

        if let Some(report) = reports.and_then(|r| r.get(index)) {
            println!("      {}", explain(report));
        }
    }

    if matched && platform.highlighted.is_none() {
        println!("  {}", "(no plan fits)".dimmed());
    }
    println!();
}

fn platform_header(platform: &PlatformView) -> ColoredString {
    match parse_hex_color(&platform.color) {
        Some((r, g, b)) => platform.name.bold().truecolor(r, g, b),
        None => platform.name.bold(),
    }
}

/// Render which conditions passed, e.g. "pdfs ✓ size ✓ pages ✗ ads ✓"
pub fn explain(report: &MatchReport) -> String {
    let mark = |ok: bool| if ok { "✓".green() } else { "✗".red() };
    format!(
        "pdfs {} size {} pages {} ads {}",
        mark(report.pdf_count),
        mark(report.file_size),
        mark(report.page_count),
        mark(report.ad_free)
    )
}

/// Parse `#rrggbb` or `#rgb`
fn parse_hex_color(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        6 => Some((
            u8::from_str_radix(&hex[0..2], 16).ok()?,
            u8::from_str_radix(&hex[2..4], 16).ok()?,
            u8::from_str_radix(&hex[4..6], 16).ok()?,
        )),
        3 => {
            let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|d| d * 17);
            Some((digit(0)?, digit(1)?, digit(2)?))
        }
        _ => None,
    }
}
