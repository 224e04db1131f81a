use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Install the Prometheus recorder and register all application metrics.
/// Returns a `PrometheusHandle` whose `render()` method produces the
/// text/plain Prometheus payload.
pub fn init_metrics() -> PrometheusHandle {
    let builder = PrometheusBuilder::new();
    let handle = builder
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    // Pre-register counters so they appear even before the first increment.
    counter!("rank_passes_total").absolute(0);
    counter!("balances_dropped_total").absolute(0);
    counter!("price_lookups_failed_total").absolute(0);
    counter!("sum_cache_hits_total").absolute(0);
    counter!("sum_cache_misses_total").absolute(0);

    handle
}
