//! Request handling helpers.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) when the client sent none
//! - Classify the edge-proxy headers with the configured header profile
//! - Simulate per-route processing cost
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - Handlers receive the header map explicitly; nothing reads request-scoped globals

use std::time::Duration;

use axum::http::{HeaderMap, HeaderName, HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

use crate::config::DemoConfig;
use crate::edge::{classify_with, EdgeRequestInfo};
use crate::observability::metrics;

pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Issues a random UUID per request.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// The request ID set by the request-id layer.
pub fn request_id(headers: &HeaderMap) -> &str {
    headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}

/// Classify the request's edge headers and record the outcome.
pub fn edge_info(config: &DemoConfig, headers: &HeaderMap) -> EdgeRequestInfo {
    let info = classify_with(headers, &config.edge.header_profile.names());

    tracing::debug!(
        request_id = %request_id(headers),
        edge_proxied = info.is_edge_proxied,
        outcome = info.cache_outcome_str().unwrap_or("-"),
        ray_id = info.ray_id.as_deref().unwrap_or("-"),
        "Classified edge headers"
    );
    metrics::record_edge_outcome(&info);

    info
}

/// Sleep for `ms` milliseconds; a zero delay returns immediately.
pub async fn simulate_latency(ms: u64) {
    if ms > 0 {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}
