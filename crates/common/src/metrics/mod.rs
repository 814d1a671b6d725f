//! Metrics and observability utilities
//!
//! Metric names share the `backendapp_` prefix. Recording is a no-op until a
//! recorder (the Prometheus exporter in the gateway) is installed.

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram, Unit};

/// Metrics prefix for all BackendApp metrics
pub const METRICS_PREFIX: &str = "backendapp";

/// Register all metric descriptions
pub fn register_metrics() {
    // Detail write metrics
    describe_counter!(
        format!("{}_details_created_total", METRICS_PREFIX),
        Unit::Count,
        "Total product/supplier/detail transactions committed"
    );

    describe_counter!(
        format!("{}_details_failed_total", METRICS_PREFIX),
        Unit::Count,
        "Total detail transactions rolled back"
    );

    describe_histogram!(
        format!("{}_detail_write_duration_seconds", METRICS_PREFIX),
        Unit::Seconds,
        "Latency of the three-insert transaction in seconds"
    );

    // Search metrics
    describe_counter!(
        format!("{}_detail_searches_total", METRICS_PREFIX),
        Unit::Count,
        "Total detail listing queries"
    );

    describe_histogram!(
        format!("{}_detail_search_duration_seconds", METRICS_PREFIX),
        Unit::Seconds,
        "Detail listing latency in seconds"
    );

    describe_gauge!(
        format!("{}_detail_search_results_count", METRICS_PREFIX),
        Unit::Count,
        "Number of rows returned by the last detail listing"
    );

    // Registry metrics
    describe_gauge!(
        format!("{}_registry_products", METRICS_PREFIX),
        Unit::Count,
        "Products held by the in-memory registry"
    );

    tracing::info!("Metrics registered");
}

/// Helper to record a committed detail write
pub fn record_detail_created(duration_secs: f64) {
    counter!(format!("{}_details_created_total", METRICS_PREFIX)).increment(1);

    histogram!(format!("{}_detail_write_duration_seconds", METRICS_PREFIX)).record(duration_secs);
}

/// Helper to record a rolled back detail write
pub fn record_detail_failed() {
    counter!(format!("{}_details_failed_total", METRICS_PREFIX)).increment(1);
}

/// Helper to record detail listing metrics
pub fn record_search(duration_secs: f64, filtered: bool, result_count: usize) {
    let mode = if filtered { "filtered" } else { "all" };

    counter!(
        format!("{}_detail_searches_total", METRICS_PREFIX),
        "mode" => mode
    )
    .increment(1);

    histogram!(
        format!("{}_detail_search_duration_seconds", METRICS_PREFIX),
        "mode" => mode
    )
    .record(duration_secs);

    gauge!(
        format!("{}_detail_search_results_count", METRICS_PREFIX),
        "mode" => mode
    )
    .set(result_count as f64);
}

/// Helper to record the registry size
pub fn record_registry_size(size: usize) {
    gauge!(format!("{}_registry_products", METRICS_PREFIX)).set(size as f64);
}
