//! HTTP handlers
//!
//! - health: liveness and readiness probes
//! - plans: render-all and render-matched views for the widget
//! - metrics_handler: Prometheus scrape endpoint

pub mod health;
pub mod metrics_handler;
pub mod plans;

use crate::catalog::CatalogState;
use crate::matching::Matcher;

/// Shared state for the widget API
///
/// The catalog is loaded before the state is built and never changes
/// afterwards, so cloning is cheap and lock-free.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: CatalogState,
    pub matcher: Matcher,
}

impl AppState {
    pub fn new(catalog: CatalogState, matcher: Matcher) -> Self {
        Self { catalog, matcher }
    }
}
