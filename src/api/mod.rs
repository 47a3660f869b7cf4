//! JSON endpoints echoing edge metadata under different caching policies.

pub mod handlers;
pub mod types;

use axum::{routing::get, Router};

use crate::http::server::AppState;
use self::handlers::*;

pub fn setup_api_router() -> Router<AppState> {
    Router::new()
        .route("/api/hello", get(hello))
        .route("/api/cache", get(cache_get).post(cache_post))
        .route("/api/strategies", get(strategies))
        .route("/api/slow", get(slow))
}
