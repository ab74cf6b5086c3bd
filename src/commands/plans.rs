use anyhow::Result;
use plan_compare::{config::Config, presentation::render_all};

use super::{load_catalog, render};
use crate::cli::CatalogArgs;

/// Execute the plans command
///
/// Prints every platform and plan without highlighting
pub async fn execute(cfg: &Config, args: &CatalogArgs) -> Result<()> {
    let catalog = load_catalog(cfg, args.catalog.as_deref()).await?;
    let view = render_all(&catalog);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        render::print_comparison(&view);
    }

    Ok(())
}
