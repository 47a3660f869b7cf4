//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → DemoConfig (validated, immutable)
//!     → shared via ArcSwap with all handlers
//!
//! On file change (--watch):
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → atomic swap of Arc<DemoConfig>
//!     → next request observes new config
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require full reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::DemoConfig;
pub use schema::{EdgeConfig, LatencyConfig, ListenerConfig, ObservabilityConfig, SiteConfig, TimeoutConfig};
pub use validation::{validate_config, ValidationError};
