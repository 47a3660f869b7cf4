//! Metrics collection and exposition.
//!
//! # Metrics
//! - `demo_requests_total` (counter): requests by route template, status
//! - `demo_request_duration_seconds` (histogram): latency by route template
//! - `demo_edge_outcomes_total` (counter): classified requests by cache outcome

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::edge::EdgeRequestInfo;

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

pub fn record_request(route: &str, status: u16, start: Instant) {
    metrics::counter!(
        "demo_requests_total",
        "route" => route.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!("demo_request_duration_seconds", "route" => route.to_string())
        .record(start.elapsed().as_secs_f64());
}

/// Count one classified request. Unproxied requests are labelled `none`.
pub fn record_edge_outcome(info: &EdgeRequestInfo) {
    let outcome = match (&info.cache_outcome, info.is_edge_proxied) {
        (_, false) => "none",
        (None, true) => "absent",
        (Some(outcome), true) => outcome.metric_label(),
    };
    metrics::counter!("demo_edge_outcomes_total", "outcome" => outcome).increment(1);
}
