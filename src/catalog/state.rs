use std::sync::Arc;
use tracing::{error, info};

use super::{Catalog, CatalogLoader, CatalogSource};
use crate::metrics;

/// Catalog lifecycle for one process
///
/// The catalog starts `Empty` and becomes `Loaded` after a single successful
/// load. A failed load leaves it `Empty` for the rest of the session; there is
/// no retry.
#[derive(Debug, Clone, Default)]
pub enum CatalogState {
    #[default]
    Empty,
    Loaded(Arc<Catalog>),
}

impl CatalogState {
    /// Load the catalog once, logging instead of returning failures
    pub async fn initialize(loader: &CatalogLoader, source: &CatalogSource) -> Self {
        match loader.load(source).await {
            Ok(catalog) => {
                info!(
                    source = %source,
                    platforms = catalog.len(),
                    plans = catalog.plan_count(),
                    "Pricing catalog loaded"
                );
                metrics::record_catalog_load("success");
                CatalogState::Loaded(Arc::new(catalog))
            }
            Err(e) => {
                error!(source = %source, "Error loading pricing data: {}", e);
                metrics::record_catalog_load("failure");
                CatalogState::Empty
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, CatalogState::Loaded(_))
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        match self {
            CatalogState::Loaded(catalog) => Some(catalog.as_ref()),
            CatalogState::Empty => None,
        }
    }
}

impl From<Catalog> for CatalogState {
    fn from(catalog: Catalog) -> Self {
        CatalogState::Loaded(Arc::new(catalog))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;

    #[test]
    fn test_default_is_empty() {
        let state = CatalogState::default();
        assert!(!state.is_loaded());
        assert!(state.catalog().is_none());
    }

    #[tokio::test]
    async fn test_failed_load_stays_empty() {
        let loader = CatalogLoader::new(Duration::from_secs(1));
        let source = CatalogSource::File(PathBuf::from("/nonexistent/pricing-data.json"));
        let state = CatalogState::initialize(&loader, &source).await;
        assert!(!state.is_loaded());
    }

    #[test]
    fn test_from_catalog_is_loaded() {
        let state = CatalogState::from(Catalog::default());
        assert!(state.is_loaded());
        assert_eq!(state.catalog().map(Catalog::len), Some(0));
    }
}
