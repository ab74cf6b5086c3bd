use clap::{Args, Parser, Subcommand};
use plan_compare::MatchPolicy;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "plan-compare", version, about = "Pricing plan comparison service")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the comparison API server (default)
    Start,

    /// Print every plan without highlighting
    Plans(CatalogArgs),

    /// Highlight the first plan per platform that fits the given usage
    Match(MatchArgs),

    /// Test configuration file validity
    Test,

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CatalogArgs {
    /// Catalog file path or URL (overrides catalog.source)
    #[arg(long)]
    pub catalog: Option<String>,

    /// Print JSON instead of plan cards
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct MatchArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Number of documents; unparsable values fall back to 1
    #[arg(short = 'n', long, default_value = "1")]
    pub pdf_count: String,

    /// File size category: small, medium or large
    #[arg(short, long, default_value = "small")]
    pub file_size: String,

    /// Page count category: small, medium or large
    #[arg(short, long, default_value = "small")]
    pub page_count: String,

    /// Require an ad-free plan
    #[arg(long)]
    pub ad_free: bool,

    /// Matching policy (overrides matching.policy)
    #[arg(long)]
    pub policy: Option<MatchPolicy>,

    /// Show which conditions each plan passed
    #[arg(long)]
    pub explain: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display the effective configuration
    Show,

    /// Validate configuration file
    Validate,
}

impl Cli {
    /// Get the command to execute, defaulting to Start if none provided
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Start)
    }
}
