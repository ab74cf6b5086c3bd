use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::catalog::CatalogSource;
use crate::matching::MatchPolicy;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub matching: MatchingConfig,
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub log_format: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// File path or http(s) URL of the pricing document
    pub source: String,
    pub timeout_seconds: u64,
}

impl CatalogConfig {
    pub fn source(&self) -> CatalogSource {
        CatalogSource::parse(&self.source)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MatchingConfig {
    pub policy: MatchPolicy,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MetricsConfig {
    pub enabled: bool,
    pub endpoint: String,
}

/// Load configuration from an optional TOML file
///
/// Built-in defaults are overridden by the file, which is overridden by
/// `PLAN_COMPARE__SECTION__KEY` environment variables.
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 8080)?
        .set_default("server.log_level", "info")?
        .set_default("server.log_format", "pretty")?
        .set_default("catalog.source", "pricing-data.json")?
        .set_default("catalog.timeout_seconds", 10)?
        .set_default("matching.policy", "threshold")?
        .set_default("metrics.enabled", true)?
        .set_default("metrics.endpoint", "/metrics")?
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix("PLAN_COMPARE").separator("__"))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    if cfg.server.host.parse::<std::net::IpAddr>().is_err() {
        anyhow::bail!("Server host '{}' is not a valid IP address", cfg.server.host);
    }

    match cfg.server.log_format.as_str() {
        "pretty" | "json" => {}
        other => anyhow::bail!("Invalid log format '{}': expected 'pretty' or 'json'", other),
    }

    if cfg.catalog.source.trim().is_empty() {
        anyhow::bail!("Catalog source cannot be empty");
    }

    if cfg.catalog.timeout_seconds == 0 {
        anyhow::bail!("Catalog timeout must be at least one second");
    }

    if cfg.metrics.enabled && !cfg.metrics.endpoint.starts_with('/') {
        anyhow::bail!(
            "Metrics endpoint '{}' must start with '/'",
            cfg.metrics.endpoint
        );
    }

    Ok(())
}
