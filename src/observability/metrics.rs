//! Metrics collection and exposition.
//!
//! # Metrics
//! - `subconv_requests_total` (counter): conversions by outcome
//! - `subconv_request_duration_seconds` (histogram): conversion latency by outcome
//! - `subconv_upstream_bytes` (histogram): size of fetched subscriptions
//!
//! Without an installed recorder every call is a no-op.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Start the Prometheus scrape listener on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            metrics::describe_counter!("subconv_requests_total", "Conversions by outcome");
            metrics::describe_histogram!(
                "subconv_request_duration_seconds",
                metrics::Unit::Seconds,
                "Conversion latency by outcome"
            );
            metrics::describe_histogram!(
                "subconv_upstream_bytes",
                metrics::Unit::Bytes,
                "Size of fetched subscription documents"
            );
            tracing::info!(address = %addr, "Metrics endpoint listening");
        }
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one finished conversion.
pub fn record_conversion(outcome: &'static str, start_time: Instant) {
    metrics::counter!("subconv_requests_total", "outcome" => outcome).increment(1);
    metrics::histogram!("subconv_request_duration_seconds", "outcome" => outcome)
        .record(start_time.elapsed().as_secs_f64());
}

/// Record the size of a fetched subscription body.
pub fn record_upstream_bytes(bytes: usize) {
    metrics::histogram!("subconv_upstream_bytes").record(bytes as f64);
}
