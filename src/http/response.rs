//! Response decoration.
//!
//! # Responsibilities
//! - Attach a route's caching policy to an outgoing response
//! - Stamp API responses with their generation time

use axum::http::{HeaderMap, HeaderValue};
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, SecondsFormat, Utc};

use crate::strategy::{CachePolicy, X_GENERATED_AT};

/// RFC 3339 with millisecond precision, e.g. `2025-01-31T12:00:00.000Z`.
pub fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn stamp_generated_at(headers: &mut HeaderMap, at: DateTime<Utc>) {
    if let Ok(value) = HeaderValue::from_str(&timestamp(at)) {
        headers.insert(X_GENERATED_AT, value);
    }
}

/// Convert `body` into a response carrying `policy`'s headers.
pub fn with_policy(body: impl IntoResponse, policy: &CachePolicy) -> Response {
    let mut response = body.into_response();
    policy.apply(response.headers_mut());
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header::CACHE_CONTROL, StatusCode};
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_format() {
        let at = Utc.with_ymd_and_hms(2025, 1, 31, 12, 0, 0).unwrap();
        assert_eq!(timestamp(at), "2025-01-31T12:00:00.000Z");
    }

    #[test]
    fn test_with_policy_keeps_status() {
        let response = with_policy((StatusCode::NOT_FOUND, "gone"), &CachePolicy::DYNAMIC);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()[CACHE_CONTROL], "no-cache, no-store, must-revalidate");
    }

    #[test]
    fn test_stamp_generated_at() {
        let mut headers = HeaderMap::new();
        let at = Utc.with_ymd_and_hms(2025, 6, 1, 8, 30, 15).unwrap();
        stamp_generated_at(&mut headers, at);
        assert_eq!(headers[X_GENERATED_AT], "2025-06-01T08:30:15.000Z");
    }
}
