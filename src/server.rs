use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::{
    catalog::{CatalogLoader, CatalogState},
    config::Config,
    handlers::{self, AppState},
    matching::Matcher,
    metrics,
    signals::setup_signal_handlers,
};

/// Form submissions are a handful of short fields
const MAX_BODY_BYTES: usize = 16 * 1024;

/// Start the pricing comparison server
///
/// This function:
/// 1. Initializes metrics (if enabled)
/// 2. Loads the pricing catalog once; a failure is logged and the server
///    keeps running with an empty catalog
/// 3. Sets up signal handlers for graceful shutdown
/// 4. Binds to the configured address and serves requests
pub async fn start_server(config: Config) -> Result<()> {
    let metrics_handle = if config.metrics.enabled {
        info!("Initializing Prometheus metrics...");
        Some(Arc::new(metrics::init_metrics()?))
    } else {
        None
    };

    let source = config.catalog.source();
    info!("Loading pricing catalog from {}", source);
    let loader = CatalogLoader::new(config.catalog.timeout());
    let catalog = CatalogState::initialize(&loader, &source).await;

    let (shutdown_tx, signal_handle) = setup_signal_handlers();
    let mut shutdown_rx = shutdown_tx.subscribe();

    let app_state = AppState::new(catalog, Matcher::new(config.matching.policy));
    let app = create_router(app_state, metrics_handle, &config.metrics.endpoint);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    info!("Starting plan comparison service on {}", addr);
    info!(
        "Configuration: policy {}, catalog source {}, metrics {}",
        config.matching.policy,
        source,
        if config.metrics.enabled { "enabled" } else { "disabled" }
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.recv().await;
            info!("Shutdown signal received, draining connections...");
        })
        .await?;

    signal_handle.await?;
    info!("Server stopped gracefully");

    Ok(())
}

/// Create the Axum router with all routes and middleware
pub fn create_router(
    app_state: AppState,
    metrics_handle: Option<Arc<metrics_exporter_prometheus::PrometheusHandle>>,
    metrics_endpoint: &str,
) -> Router {
    let api_routes = Router::new()
        .route("/ready", get(handlers::health::readiness_check))
        .route("/api/plans", get(handlers::plans::list_plans))
        .route("/api/match", post(handlers::plans::match_plans))
        .with_state(app_state);

    let mut router = Router::new()
        .route("/health", get(handlers::health::health_check))
        .merge(api_routes);

    if let Some(handle) = metrics_handle {
        router = router.merge(
            Router::new()
                .route(metrics_endpoint, get(handlers::metrics_handler::metrics))
                .with_state(handle),
        );
    }

    router
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        // The widget is embedded in pages served from other origins
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
