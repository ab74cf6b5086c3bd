use anyhow::Result;
use colored::Colorize;
use plan_compare::{config::Config, server};
use tracing::info;

/// Execute the start command
///
/// Loads the catalog and serves the comparison API until SIGINT/SIGTERM
pub async fn execute(cfg: Config) -> Result<()> {
    println!("{}", "Starting plan comparison service...".green());
    info!(
        "Starting on {}:{} with {} policy",
        cfg.server.host, cfg.server.port, cfg.matching.policy
    );

    server::start_server(cfg).await?;

    Ok(())
}
