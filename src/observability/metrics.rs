//! Metrics collection and exposition.
//!
//! # Metrics
//! - `relay_requests_total` (counter): relay requests by operation, status
//! - `relay_request_duration_seconds` (histogram): latency incl. upstream call
//! - `relay_upstream_failures_total` (counter): failed upstream calls by operation
//!
//! Recording is a no-op until `init_metrics` installs the Prometheus recorder.

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus recorder and serve `/metrics` on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

pub fn record_request(operation: &'static str, status: u16, start_time: Instant) {
    ::metrics::counter!(
        "relay_requests_total",
        "operation" => operation,
        "status" => status.to_string()
    )
    .increment(1);

    ::metrics::histogram!("relay_request_duration_seconds", "operation" => operation)
        .record(start_time.elapsed().as_secs_f64());
}

pub fn record_upstream_failure(operation: &'static str) {
    ::metrics::counter!("relay_upstream_failures_total", "operation" => operation).increment(1);
}
