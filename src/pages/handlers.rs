use askama::Template;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
};
use chrono::Utc;
use rand::Rng;

use crate::http::request::{edge_info, request_id, simulate_latency};
use crate::http::response::{timestamp, with_policy};
use crate::http::server::AppState;
use crate::http::SiteError;
use crate::pages::catalog;
use crate::pages::templates::*;
use crate::strategy::CachePolicy;

/// Seconds between regenerations advertised by the ISR page.
const ISR_REVALIDATE_SECS: u32 = 60;

pub async fn home(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Html<String>, SiteError> {
    let info = edge_info(&state.config(), &headers);
    let page = HomeTemplate {
        edge: EdgeView::from(&info),
        slugs: catalog::slugs(),
    };
    Ok(Html(page.render()?))
}

pub async fn ssg(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, SiteError> {
    let info = edge_info(&state.config(), &headers);
    let page = SsgTemplate {
        edge: EdgeView::from(&info),
        built_at: timestamp(state.started_at()),
    };
    Ok(with_policy(Html(page.render()?), &CachePolicy::SSG))
}

pub async fn isr(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, SiteError> {
    let config = state.config();
    let info = edge_info(&config, &headers);

    simulate_latency(config.latency.isr_ms).await;

    let now = Utc::now();
    let page = IsrTemplate {
        edge: EdgeView::from(&info),
        generated_at: timestamp(now),
        random_value: rand::thread_rng().gen_range(0..1000),
        server_time_ms: now.timestamp_millis(),
        revalidate_secs: ISR_REVALIDATE_SECS,
    };
    Ok(with_policy(Html(page.render()?), &CachePolicy::ISR))
}

pub async fn dynamic(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    headers: HeaderMap,
) -> Result<Response, SiteError> {
    let config = state.config();
    let info = edge_info(&config, &headers);

    simulate_latency(config.latency.dynamic_ms).await;

    let Some(entry) = catalog::find(&slug) else {
        tracing::debug!(request_id = %request_id(&headers), slug = %slug, "Unknown dynamic slug");
        let page = NotFoundTemplate {
            slug,
            slugs: catalog::slugs(),
        };
        return Ok(with_policy(
            (StatusCode::NOT_FOUND, Html(page.render()?)),
            &CachePolicy::DYNAMIC,
        ));
    };

    let page = DynamicTemplate {
        edge: EdgeView::from(&info),
        slug: entry.slug.to_string(),
        title: entry.title.to_string(),
        description: entry.description.to_string(),
        color: entry.color.to_string(),
        features: entry.features.to_vec(),
        rendered_at: timestamp(Utc::now()),
    };
    Ok(with_policy(Html(page.render()?), &CachePolicy::DYNAMIC))
}

pub async fn caching(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, SiteError> {
    let config = state.config();
    let info = edge_info(&config, &headers);
    let names = config.edge.header_profile.names();

    let page = CachingTemplate {
        edge: EdgeView::from(&info),
        header_names: vec![names.cache_outcome, names.ray_id, names.country_code],
    };
    Ok(Html(page.render()?))
}
