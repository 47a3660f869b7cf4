//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses and value ranges
//! - Reject simulated delays that would always hit the request timeout
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: DemoConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;

use crate::config::schema::DemoConfig;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("listener.bind_address '{0}' is not a socket address")]
    InvalidBindAddress(String),

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroRequestTimeout,

    #[error("latency for '{route}' ({latency_ms} ms) exceeds the request timeout ({timeout_ms} ms)")]
    LatencyExceedsTimeout {
        route: &'static str,
        latency_ms: u64,
        timeout_ms: u64,
    },

    #[error("observability.log_level '{0}' is not a log level")]
    InvalidLogLevel(String),

    #[error("observability.metrics_address '{0}' is not a socket address")]
    InvalidMetricsAddress(String),
}

/// Check a parsed configuration, collecting every problem found.
pub fn validate_config(config: &DemoConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    } else {
        let timeout_ms = config.timeouts.request_secs.saturating_mul(1000);
        for (route, latency_ms) in config.latency.entries() {
            if latency_ms >= timeout_ms {
                errors.push(ValidationError::LatencyExceedsTimeout {
                    route,
                    latency_ms,
                    timeout_ms,
                });
            }
        }
    }

    if config.observability.log_level.parse::<LevelFilter>().is_err() {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
