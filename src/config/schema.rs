//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the demo site.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::edge::HeaderProfile;

/// Root configuration for the demo site.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Which edge network's diagnostic headers to read.
    pub edge: EdgeConfig,

    /// Values reported by the API endpoints.
    pub site: SiteConfig,

    /// Simulated processing cost per route.
    pub latency: LatencyConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct EdgeConfig {
    pub header_profile: HeaderProfile,
}

/// Site identity shown in API responses.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    /// Region name of this origin (e.g., "sa-east-1"); "local" when unset.
    pub region: String,

    /// Runtime label.
    pub runtime: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            region: "local".to_string(),
            runtime: "axum".to_string(),
        }
    }
}

/// Artificial delays, in milliseconds, that stand in for real work.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LatencyConfig {
    pub isr_ms: u64,
    pub dynamic_ms: u64,
    pub api_cache_get_ms: u64,
    pub api_cache_post_ms: u64,
    pub strategies_ms: u64,
    pub slow_ms: u64,
}

impl LatencyConfig {
    /// No artificial delay anywhere.
    pub fn none() -> Self {
        Self {
            isr_ms: 0,
            dynamic_ms: 0,
            api_cache_get_ms: 0,
            api_cache_post_ms: 0,
            strategies_ms: 0,
            slow_ms: 0,
        }
    }

    /// Every configured delay, labelled by route.
    pub fn entries(&self) -> [(&'static str, u64); 6] {
        [
            ("isr", self.isr_ms),
            ("dynamic", self.dynamic_ms),
            ("api_cache_get", self.api_cache_get_ms),
            ("api_cache_post", self.api_cache_post_ms),
            ("strategies", self.strategies_ms),
            ("slow", self.slow_ms),
        ]
    }
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            isr_ms: 100,
            dynamic_ms: 200,
            api_cache_get_ms: 100,
            api_cache_post_ms: 200,
            strategies_ms: 150,
            slow_ms: 1500,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
