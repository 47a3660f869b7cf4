use axum::{
    extract::{Query, State},
    http::{HeaderMap, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;

use crate::api::types::*;
use crate::http::request::{edge_info, request_id, simulate_latency};
use crate::http::response::{stamp_generated_at, timestamp, with_policy};
use crate::http::server::AppState;
use crate::strategy::{CachePolicy, Strategy, X_CACHE_STRATEGY};

const NOT_AVAILABLE: &str = "not available";

pub async fn hello(State(state): State<AppState>, headers: HeaderMap) -> Json<HelloResponse> {
    let config = state.config();

    Json(HelloResponse {
        ok: true,
        message: "Hello from /api/hello",
        timestamp: timestamp(Utc::now()),
        edge: edge_info(&config, &headers),
        request: ClientHeaders::from_headers(&headers),
        server: ServerInfo {
            runtime: config.site.runtime.clone(),
            region: config.site.region.clone(),
        },
    })
}

pub async fn cache_get(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let config = state.config();
    let edge = edge_info(&config, &headers);

    simulate_latency(config.latency.api_cache_get_ms).await;

    let now = Utc::now();
    let body = CacheResponse {
        ok: true,
        message: "API response cached at the edge",
        timestamp: timestamp(now),
        cache: CacheSummary {
            strategy: "Edge cache",
            ttl: "300 seconds (5 minutes)",
            status: edge.cache_outcome_str().unwrap_or(NOT_AVAILABLE).to_string(),
        },
        edge,
        performance: Performance {
            server_time: now.timestamp_millis(),
            region: config.site.region.clone(),
            runtime: config.site.runtime.clone(),
        },
    };

    let mut response = with_policy(Json(body), &CachePolicy::EDGE_API);
    stamp_generated_at(response.headers_mut(), now);
    response
}

pub async fn cache_post(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let config = state.config();
    let edge = edge_info(&config, &headers);

    simulate_latency(config.latency.api_cache_post_ms).await;

    let body = UncachedResponse {
        ok: true,
        message: "POST request processed - not cached",
        timestamp: timestamp(Utc::now()),
        method: "POST",
        cache: UncachedSummary {
            strategy: "No cache (POST request)",
            reason: "POST requests are not cached by default",
        },
        edge,
    };

    with_policy(Json(body), &CachePolicy::NO_CACHE)
}

pub async fn strategies(
    State(state): State<AppState>,
    Query(params): Query<StrategyParams>,
    headers: HeaderMap,
) -> Response {
    let config = state.config();
    let edge = edge_info(&config, &headers);
    let requested = params
        .strategy
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "default".to_string());
    let strategy = Strategy::from_query(Some(&requested));

    tracing::debug!(
        request_id = %request_id(&headers),
        requested = %requested,
        strategy = strategy.name(),
        "Applying caching strategy"
    );

    simulate_latency(config.latency.strategies_ms).await;

    let now = Utc::now();
    let label = HeaderValue::from_str(&requested).ok();
    let body = StrategyResponse {
        ok: true,
        timestamp: timestamp(now),
        strategy: requested,
        message: strategy.message(),
        edge,
    };

    let mut response = with_policy(Json(body), &strategy.policy());
    // Echo the requested name; fall back to the canonical one if it is not a valid header value.
    if let Some(label) = label {
        response.headers_mut().insert(X_CACHE_STRATEGY, label);
    }
    stamp_generated_at(response.headers_mut(), now);
    response
}

pub async fn slow(State(state): State<AppState>) -> impl IntoResponse {
    let latency_ms = state.config().latency.slow_ms;

    simulate_latency(latency_ms).await;

    Json(SlowResponse {
        ok: true,
        simulated_latency_ms: latency_ms,
    })
}
