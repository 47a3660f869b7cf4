//! Edge-proxy request metadata.
//!
//! # Data Flow
//! ```text
//! inbound request headers (HeaderMap, HashMap, ...)
//!     → headers.rs (HeaderLookup, header-name profiles)
//!     → classify.rs (identity check, field extraction)
//!     → outcome.rs (cache outcome vocabulary + explanation)
//!     → EdgeRequestInfo (immutable, one per request)
//! ```
//!
//! # Design Decisions
//! - Classification is a pure function of the header snapshot
//! - Missing, empty or non-UTF-8 headers degrade to `None`, never to an error
//! - Any one identity header is enough to count as edge-proxied; nothing here
//!   verifies that the proxy is genuine

pub mod classify;
pub mod headers;
pub mod outcome;

pub use classify::{classify, classify_with, EdgeRequestInfo, NOT_PROXIED, NO_CACHE_OUTCOME};
pub use headers::{EdgeHeaderNames, HeaderLookup, HeaderProfile};
pub use outcome::CacheOutcome;
