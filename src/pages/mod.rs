//! HTML pages demonstrating each rendering strategy.
//!
//! | Route             | Policy                  |
//! |-------------------|-------------------------|
//! | `/`               | none                    |
//! | `/ssg`            | [`CachePolicy::SSG`]     |
//! | `/isr`            | [`CachePolicy::ISR`]     |
//! | `/dynamic/{slug}` | [`CachePolicy::DYNAMIC`] |
//! | `/caching`        | none                    |
//!
//! [`CachePolicy::SSG`]: crate::strategy::CachePolicy::SSG
//! [`CachePolicy::ISR`]: crate::strategy::CachePolicy::ISR
//! [`CachePolicy::DYNAMIC`]: crate::strategy::CachePolicy::DYNAMIC

pub mod catalog;
pub mod handlers;
pub mod templates;

use axum::{routing::get, Router};

use crate::http::server::AppState;
use self::handlers::*;

pub fn setup_pages_router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/ssg", get(ssg))
        .route("/isr", get(isr))
        .route("/dynamic/{slug}", get(dynamic))
        .route("/caching", get(caching))
}
