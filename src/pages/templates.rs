//! Askama templates for the HTML pages.
//!
//! Header values come from the client (or the proxy in front of it), so every
//! page goes through askama's HTML escaping.

use askama::Template;

use crate::edge::EdgeRequestInfo;

const NOT_AVAILABLE: &str = "not available";

/// Display-ready edge fields shared by every page.
#[derive(Debug, Clone)]
pub struct EdgeView {
    pub proxied: bool,
    pub ray_id: String,
    pub country: String,
    pub connecting_ip: String,
    pub visitor: String,
    pub outcome: String,
    pub explanation: String,
}

impl From<&EdgeRequestInfo> for EdgeView {
    fn from(info: &EdgeRequestInfo) -> Self {
        let shown = |value: Option<&str>| value.unwrap_or(NOT_AVAILABLE).to_string();
        Self {
            proxied: info.is_edge_proxied,
            ray_id: shown(info.ray_id.as_deref()),
            country: shown(info.country_code.as_deref()),
            connecting_ip: shown(info.connecting_ip.as_deref()),
            visitor: shown(info.visitor_info.as_deref()),
            outcome: shown(info.cache_outcome_str()),
            explanation: info.explanation.clone(),
        }
    }
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub edge: EdgeView,
    pub slugs: Vec<&'static str>,
}

#[derive(Template)]
#[template(path = "ssg.html")]
pub struct SsgTemplate {
    pub edge: EdgeView,
    pub built_at: String,
}

#[derive(Template)]
#[template(path = "isr.html")]
pub struct IsrTemplate {
    pub edge: EdgeView,
    pub generated_at: String,
    pub random_value: u32,
    pub server_time_ms: i64,
    pub revalidate_secs: u32,
}

#[derive(Template)]
#[template(path = "dynamic.html")]
pub struct DynamicTemplate {
    pub edge: EdgeView,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub color: String,
    pub features: Vec<&'static str>,
    pub rendered_at: String,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub slug: String,
    pub slugs: Vec<&'static str>,
}

#[derive(Template)]
#[template(path = "caching.html")]
pub struct CachingTemplate {
    pub edge: EdgeView,
    pub header_names: Vec<&'static str>,
}
