//! Inbound header access and the header names each edge network uses.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use axum::http::HeaderMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Read-only, case-insensitive view over a set of request headers.
pub trait HeaderLookup {
    /// Returns the value of `name`, or `None` if absent or not valid text.
    fn header(&self, name: &str) -> Option<&str>;
}

impl HeaderLookup for HeaderMap {
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|v| v.to_str().ok())
    }
}

impl HeaderLookup for HashMap<String, String> {
    fn header(&self, name: &str) -> Option<&str> {
        // Keys are expected lower-cased, but tolerate anything.
        self.get(name)
            .or_else(|| {
                self.iter()
                    .find(|(k, _)| k.eq_ignore_ascii_case(name))
                    .map(|(_, v)| v)
            })
            .map(String::as_str)
    }
}

impl<T: HeaderLookup + ?Sized> HeaderLookup for &T {
    fn header(&self, name: &str) -> Option<&str> {
        (**self).header(name)
    }
}

/// Names of the five diagnostic headers an edge proxy injects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeHeaderNames {
    pub ray_id: &'static str,
    pub country_code: &'static str,
    pub connecting_ip: &'static str,
    pub visitor_info: &'static str,
    pub cache_outcome: &'static str,
}

impl EdgeHeaderNames {
    /// Vendor-neutral names.
    pub const GENERIC: Self = Self {
        ray_id: "edge-ray-id",
        country_code: "edge-country-code",
        connecting_ip: "edge-connecting-ip",
        visitor_info: "edge-visitor-info",
        cache_outcome: "edge-cache-outcome",
    };

    /// Names injected by Cloudflare.
    pub const CLOUDFLARE: Self = Self {
        ray_id: "cf-ray",
        country_code: "cf-ipcountry",
        connecting_ip: "cf-connecting-ip",
        visitor_info: "cf-visitor",
        cache_outcome: "cf-cache-status",
    };

    /// The headers whose presence marks a request as edge-proxied.
    pub fn identity(&self) -> [&'static str; 3] {
        [self.ray_id, self.country_code, self.connecting_ip]
    }
}

impl Default for EdgeHeaderNames {
    fn default() -> Self {
        Self::GENERIC
    }
}

/// Which header-name set to read, as selected in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderProfile {
    #[default]
    Generic,
    Cloudflare,
}

impl HeaderProfile {
    pub fn names(self) -> EdgeHeaderNames {
        match self {
            HeaderProfile::Generic => EdgeHeaderNames::GENERIC,
            HeaderProfile::Cloudflare => EdgeHeaderNames::CLOUDFLARE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HeaderProfile::Generic => "generic",
            HeaderProfile::Cloudflare => "cloudflare",
        }
    }
}

impl fmt::Display for HeaderProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown header profile '{0}' (expected 'generic' or 'cloudflare')")]
pub struct UnknownProfile(pub String);

impl FromStr for HeaderProfile {
    type Err = UnknownProfile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "generic" => Ok(HeaderProfile::Generic),
            "cloudflare" => Ok(HeaderProfile::Cloudflare),
            _ => Err(UnknownProfile(s.to_string())),
        }
    }
}
