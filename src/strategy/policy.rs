//! Cache policy constants and header application.

use axum::http::header::{HeaderMap, HeaderName, HeaderValue, CACHE_CONTROL};

/// Targeted cache-control read by any CDN (RFC 9213).
pub const CDN_CACHE_CONTROL: HeaderName = HeaderName::from_static("cdn-cache-control");

/// Cloudflare-only variant; takes precedence over `CDN-Cache-Control` there.
pub const VENDOR_CDN_CACHE_CONTROL: HeaderName =
    HeaderName::from_static("cloudflare-cdn-cache-control");

/// Debug header naming the policy that produced the response.
pub const X_CACHE_STRATEGY: HeaderName = HeaderName::from_static("x-cache-strategy");

/// Debug header carrying the origin render time.
pub const X_GENERATED_AT: HeaderName = HeaderName::from_static("x-generated-at");

/// A set of outbound caching headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    /// Value for `Cache-Control`.
    pub cache_control: &'static str,
    /// Value for `CDN-Cache-Control`, if the policy sets one.
    pub cdn_cache_control: Option<&'static str>,
    /// Value for the vendor-specific CDN header, if the policy sets one.
    pub vendor_cdn_cache_control: Option<&'static str>,
    /// Value for `X-Cache-Strategy`.
    pub label: &'static str,
}

impl CachePolicy {
    /// Statically generated pages: cache for a year at the edge.
    pub const SSG: Self = Self {
        cache_control: "public, s-maxage=31536000, stale-while-revalidate=86400",
        cdn_cache_control: Some("max-age=31536000"),
        vendor_cdn_cache_control: Some("max-age=31536000"),
        label: "SSG-Static",
    };

    /// Incrementally regenerated pages: one minute fresh, five minutes stale.
    pub const ISR: Self = Self {
        cache_control: "public, s-maxage=60, stale-while-revalidate=300",
        cdn_cache_control: Some("max-age=60"),
        vendor_cdn_cache_control: Some("max-age=60"),
        label: "ISR-Revalidating",
    };

    /// Per-request pages.
    pub const DYNAMIC: Self = Self {
        cache_control: "no-cache, no-store, must-revalidate",
        cdn_cache_control: Some("no-cache"),
        vendor_cdn_cache_control: Some("no-cache"),
        label: "Dynamic-No-Cache",
    };

    /// Cacheable API responses.
    pub const EDGE_API: Self = Self {
        cache_control: "public, s-maxage=300, stale-while-revalidate=600",
        cdn_cache_control: Some("max-age=300"),
        vendor_cdn_cache_control: Some("max-age=300"),
        label: "Edge-Cache",
    };

    /// Non-idempotent API responses.
    pub const NO_CACHE: Self = Self {
        cache_control: "no-cache, no-store, must-revalidate",
        cdn_cache_control: None,
        vendor_cdn_cache_control: None,
        label: "No-Cache",
    };

    /// Write this policy's headers, replacing any previous values.
    pub fn apply(&self, headers: &mut HeaderMap) {
        headers.insert(CACHE_CONTROL, HeaderValue::from_static(self.cache_control));
        if let Some(value) = self.cdn_cache_control {
            headers.insert(CDN_CACHE_CONTROL, HeaderValue::from_static(value));
        }
        if let Some(value) = self.vendor_cdn_cache_control {
            headers.insert(VENDOR_CDN_CACHE_CONTROL, HeaderValue::from_static(value));
        }
        headers.insert(X_CACHE_STRATEGY, HeaderValue::from_static(self.label));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_ssg() {
        let mut headers = HeaderMap::new();
        CachePolicy::SSG.apply(&mut headers);

        assert_eq!(
            headers[CACHE_CONTROL],
            "public, s-maxage=31536000, stale-while-revalidate=86400"
        );
        assert_eq!(headers[CDN_CACHE_CONTROL], "max-age=31536000");
        assert_eq!(headers[VENDOR_CDN_CACHE_CONTROL], "max-age=31536000");
        assert_eq!(headers[X_CACHE_STRATEGY], "SSG-Static");
    }

    #[test]
    fn test_apply_no_cache_omits_cdn_headers() {
        let mut headers = HeaderMap::new();
        CachePolicy::NO_CACHE.apply(&mut headers);

        assert_eq!(headers[CACHE_CONTROL], "no-cache, no-store, must-revalidate");
        assert!(headers.get(CDN_CACHE_CONTROL).is_none());
        assert!(headers.get(VENDOR_CDN_CACHE_CONTROL).is_none());
        assert_eq!(headers[X_CACHE_STRATEGY], "No-Cache");
    }

    #[test]
    fn test_apply_replaces_existing() {
        let mut headers = HeaderMap::new();
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("private"));
        CachePolicy::ISR.apply(&mut headers);

        assert_eq!(headers.get_all(CACHE_CONTROL).iter().count(), 1);
        assert_eq!(headers[CACHE_CONTROL], "public, s-maxage=60, stale-while-revalidate=300");
    }
}
