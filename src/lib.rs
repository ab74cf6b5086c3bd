pub mod catalog;
pub mod config;
pub mod error;
pub mod handlers;
pub mod matching;
pub mod metrics;
pub mod presentation;
pub mod server;
pub mod signals;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub use catalog::{Catalog, CatalogError, CatalogLoader, CatalogSource, CatalogState, Ceiling, Plan, Platform};
pub use matching::{Category, FormInput, MatchPolicy, Matcher, UserInputs};

/// Initialize tracing/logging
///
/// `RUST_LOG` takes precedence over `default_level`. `log_format` is either
/// `"json"` or anything else for human-readable output.
///
/// Note: This function can only be called once per process.
pub fn init_tracing(default_level: &str, log_format: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let registry = tracing_subscriber::registry().with(filter);

    if log_format == "json" {
        registry.with(fmt::layer().json().with_target(true)).init();
    } else {
        registry.with(fmt::layer().with_target(true)).init();
    }
}
