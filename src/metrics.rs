use anyhow::Context;
use metrics::{counter, describe_counter, describe_gauge, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Initialize Prometheus metrics exporter
///
/// Fails if a recorder is already installed (e.g., a second server in the
/// same process).
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install Prometheus recorder")?;

    init_metric_descriptions();

    Ok(handle)
}

/// Initialize metric descriptions (can be called multiple times safely)
fn init_metric_descriptions() {
    describe_counter!(
        "plan_compare_match_requests_total",
        "Total number of plan match requests"
    );
    describe_counter!(
        "plan_compare_highlighted_total",
        "Number of times a platform had a highlighted plan"
    );
    describe_counter!(
        "plan_compare_catalog_loads_total",
        "Catalog load attempts by outcome"
    );
    describe_gauge!(
        "plan_compare_info",
        "Service version and build information"
    );

    gauge!("plan_compare_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);
}

/// Record a match request
pub fn record_match_request(policy: &str) {
    counter!(
        "plan_compare_match_requests_total",
        "policy" => policy.to_string(),
    )
    .increment(1);
}

/// Record that a platform had a plan highlighted
pub fn record_highlight(platform: &str) {
    counter!(
        "plan_compare_highlighted_total",
        "platform" => platform.to_string(),
    )
    .increment(1);
}

/// Record a catalog load attempt
pub fn record_catalog_load(outcome: &str) {
    counter!(
        "plan_compare_catalog_loads_total",
        "outcome" => outcome.to_string(),
    )
    .increment(1);
}
