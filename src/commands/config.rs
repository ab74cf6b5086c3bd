use anyhow::Result;
use colored::Colorize;
use plan_compare::config::Config;
use tracing::info;

/// Execute the config show command
///
/// Displays the effective configuration (defaults, file and environment merged)
pub fn show(cfg: &Config) -> Result<()> {
    info!("Displaying effective configuration");

    println!("{}", "Current Configuration:".green().bold());
    println!();

    let toml_string = toml::to_string_pretty(&mask_source_credentials(cfg))?;
    println!("{}", toml_string);

    Ok(())
}

/// Execute the config validate command
///
/// Validation already happened while loading; this reports the outcome
pub fn validate(cfg: &Config) -> Result<()> {
    info!("Configuration validation successful");

    println!("{}", "✓ Configuration is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    println!("  Catalog Source: {}", cfg.catalog.source());
    println!("  Match Policy: {}", cfg.matching.policy);
    println!(
        "  Metrics: {}",
        if cfg.metrics.enabled { "enabled" } else { "disabled" }
    );

    Ok(())
}

/// Hide `user:password@` in a catalog URL
fn mask_source_credentials(cfg: &Config) -> Config {
    let mut sanitized = cfg.clone();
    sanitized.catalog.source = mask_url_userinfo(&cfg.catalog.source);
    sanitized
}

fn mask_url_userinfo(source: &str) -> String {
    let Some((scheme, rest)) = source.split_once("://") else {
        return source.to_string();
    };

    let authority_end = rest.find('/').unwrap_or(rest.len());
    match rest[..authority_end].rfind('@') {
        Some(at) => format!("{}://***@{}", scheme, &rest[at + 1..]),
        None => source.to_string(),
    }
}
