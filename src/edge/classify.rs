//! Request-metadata classification.

use serde::Serialize;

use crate::edge::headers::{EdgeHeaderNames, HeaderLookup};
use crate::edge::outcome::CacheOutcome;

/// Explanation used when none of the identity headers is present.
pub const NOT_PROXIED: &str = "not proxied by the edge network";

/// Explanation used when the request is proxied but carries no cache outcome.
pub const NO_CACHE_OUTCOME: &str =
    "edge-proxied, but no cache outcome present (first request or non-cacheable content)";

/// Edge metadata extracted from a single request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeRequestInfo {
    pub is_edge_proxied: bool,
    pub ray_id: Option<String>,
    pub country_code: Option<String>,
    #[serde(rename = "connectingIP")]
    pub connecting_ip: Option<String>,
    pub visitor_info: Option<String>,
    pub cache_outcome: Option<CacheOutcome>,
    pub explanation: String,
}

impl EdgeRequestInfo {
    /// The raw cache outcome, if any.
    pub fn cache_outcome_str(&self) -> Option<&str> {
        self.cache_outcome.as_ref().map(CacheOutcome::as_str)
    }
}

/// Classify `headers` using the vendor-neutral header names.
pub fn classify<H: HeaderLookup + ?Sized>(headers: &H) -> EdgeRequestInfo {
    classify_with(headers, &EdgeHeaderNames::GENERIC)
}

/// Classify `headers` using an explicit header-name set.
///
/// Never fails: every missing, empty or unreadable header becomes `None`.
pub fn classify_with<H: HeaderLookup + ?Sized>(
    headers: &H,
    names: &EdgeHeaderNames,
) -> EdgeRequestInfo {
    let read = |name: &str| {
        headers
            .header(name)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };

    let ray_id = read(names.ray_id);
    let country_code = read(names.country_code);
    let connecting_ip = read(names.connecting_ip);
    let visitor_info = read(names.visitor_info);
    let cache_outcome = read(names.cache_outcome).map(|v| CacheOutcome::parse(&v));

    let is_edge_proxied = ray_id.is_some() || country_code.is_some() || connecting_ip.is_some();

    let explanation = match (is_edge_proxied, &cache_outcome) {
        (false, _) => NOT_PROXIED.to_string(),
        (true, None) => NO_CACHE_OUTCOME.to_string(),
        (true, Some(outcome)) => outcome.explanation(),
    };

    EdgeRequestInfo {
        is_edge_proxied,
        ray_id,
        country_code,
        connecting_ip,
        visitor_info,
        cache_outcome,
        explanation,
    }
}
