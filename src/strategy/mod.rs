//! Outbound caching policies.
//!
//! # Responsibilities
//! - Name the caching intent of each route class (static, revalidating, dynamic)
//! - Write the matching `Cache-Control` / `CDN-Cache-Control` headers
//! - Map the `?strategy=` query of the strategies endpoint to a policy
//!
//! # Design Decisions
//! - Policies are compile-time constants; nothing here stores or evicts
//! - The edge proxy is the only consumer of these headers

pub mod policy;
pub mod query;

pub use policy::{CachePolicy, CDN_CACHE_CONTROL, VENDOR_CDN_CACHE_CONTROL, X_CACHE_STRATEGY, X_GENERATED_AT};
pub use query::Strategy;
