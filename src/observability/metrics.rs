//! Metric recording helpers.
//!
//! # Metrics
//! - `rpc_probe_total` (counter): probes by endpoint and outcome
//! - `rpc_probe_duration_seconds` (histogram): probe round-trip latency
//! - `rpc_endpoint_healthy` (gauge): 1 = healthy, 0 = blacklisted/failing
//! - `rpc_selection_total` (counter): selections by source (cached,
//!   probed, fallback)

use std::time::Duration;

use metrics::{counter, gauge, histogram};
use url::Url;

/// Record the outcome and latency of one probe.
pub fn record_probe(endpoint: &Url, latency: Duration, success: bool) {
    let outcome = if success { "success" } else { "failure" };
    counter!(
        "rpc_probe_total",
        "endpoint" => endpoint.to_string(),
        "outcome" => outcome
    )
    .increment(1);
    histogram!(
        "rpc_probe_duration_seconds",
        "endpoint" => endpoint.to_string()
    )
    .record(latency.as_secs_f64());
}

/// Record current endpoint health.
pub fn record_endpoint_health(endpoint: &Url, healthy: bool) {
    gauge!(
        "rpc_endpoint_healthy",
        "endpoint" => endpoint.to_string()
    )
    .set(if healthy { 1.0 } else { 0.0 });
}

/// Record where a selection came from: `"cached"`, `"probed"`, or
/// `"fallback"`.
pub fn record_selection(source: &'static str) {
    counter!("rpc_selection_total", "source" => source).increment(1);
}
