//! Response bodies of the API endpoints.

use axum::http::HeaderMap;
use serde::{Deserialize, Serialize};

use crate::edge::{EdgeRequestInfo, HeaderLookup};

/// Forwarding headers seen by the origin.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientHeaders {
    pub user_agent: Option<String>,
    pub forwarded_for: Option<String>,
    #[serde(rename = "realIP")]
    pub real_ip: Option<String>,
}

impl ClientHeaders {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let read = |name: &str| headers.header(name).map(str::to_string);
        Self {
            user_agent: read("user-agent"),
            forwarded_for: read("x-forwarded-for"),
            real_ip: read("x-real-ip"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ServerInfo {
    pub runtime: String,
    pub region: String,
}

#[derive(Debug, Serialize)]
pub struct HelloResponse {
    pub ok: bool,
    pub message: &'static str,
    pub timestamp: String,
    pub edge: EdgeRequestInfo,
    pub request: ClientHeaders,
    pub server: ServerInfo,
}

#[derive(Debug, Serialize)]
pub struct CacheSummary {
    pub strategy: &'static str,
    pub ttl: &'static str,
    /// Cache outcome reported by the edge, or "not available".
    pub status: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Performance {
    pub server_time: i64,
    pub region: String,
    pub runtime: String,
}

#[derive(Debug, Serialize)]
pub struct CacheResponse {
    pub ok: bool,
    pub message: &'static str,
    pub timestamp: String,
    pub cache: CacheSummary,
    pub edge: EdgeRequestInfo,
    pub performance: Performance,
}

#[derive(Debug, Serialize)]
pub struct UncachedSummary {
    pub strategy: &'static str,
    pub reason: &'static str,
}

#[derive(Debug, Serialize)]
pub struct UncachedResponse {
    pub ok: bool,
    pub message: &'static str,
    pub timestamp: String,
    pub method: &'static str,
    pub cache: UncachedSummary,
    pub edge: EdgeRequestInfo,
}

/// Query string of `/api/strategies`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StrategyParams {
    pub strategy: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StrategyResponse {
    pub ok: bool,
    pub timestamp: String,
    /// The strategy as requested, verbatim.
    pub strategy: String,
    pub message: &'static str,
    pub edge: EdgeRequestInfo,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlowResponse {
    pub ok: bool,
    pub simulated_latency_ms: u64,
}
