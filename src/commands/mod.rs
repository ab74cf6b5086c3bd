//! Command implementations for the CLI
//!
//! - start: Start the API server
//! - plans: Print the whole catalog
//! - match_plans: Highlight the first fitting plan per platform
//! - test: Test configuration validity
//! - config: Configuration display and validation

pub mod config;
pub mod match_plans;
pub mod plans;
pub mod render;
pub mod start;

use anyhow::Result;
use plan_compare::{config::Config, Catalog, CatalogLoader, CatalogSource};
use tracing::info;

/// Load the catalog for a one-shot command
///
/// Unlike the server, a CLI run has nothing useful to do without a catalog, so
/// load failures are returned as errors.
pub async fn load_catalog(cfg: &Config, source_override: Option<&str>) -> Result<Catalog> {
    let source = source_override
        .map(CatalogSource::parse)
        .unwrap_or_else(|| cfg.catalog.source());

    info!("Loading pricing catalog from {}", source);
    let loader = CatalogLoader::new(cfg.catalog.timeout());
    let catalog = loader.load(&source).await?;

    Ok(catalog)
}
