use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use plan_compare::{config, init_tracing};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();
    let command = args.get_command();

    if let cli::Commands::Version = command {
        println!("plan-compare v{}", env!("CARGO_PKG_VERSION"));
        println!("Rust {}", env!("CARGO_PKG_RUST_VERSION"));
        return Ok(());
    }

    // Logging settings live in the config file, so it is loaded first
    let cfg = match config::load_config(&args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            init_tracing("info", "pretty");
            tracing::error!("Failed to load configuration from {:?}: {}", args.config, e);
            return Err(e);
        }
    };
    init_tracing(&cfg.server.log_level, &cfg.server.log_format);

    // Dispatch to appropriate command handler
    match command {
        cli::Commands::Start => commands::start::execute(cfg).await?,
        cli::Commands::Plans(plan_args) => commands::plans::execute(&cfg, &plan_args).await?,
        cli::Commands::Match(match_args) => {
            commands::match_plans::execute(&cfg, &match_args).await?
        }
        cli::Commands::Test => commands::test::execute(&cfg).await?,
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&cfg)?,
            cli::ConfigCommands::Validate => commands::config::validate(&cfg)?,
        },
        // Printed before configuration is loaded
        cli::Commands::Version => {}
    }

    Ok(())
}
