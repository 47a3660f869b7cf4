//! Integration tests for the JSON endpoints.

use std::time::{Duration, Instant};

use edge_cache_demo::edge::HeaderProfile;
use reqwest::StatusCode;
use serde_json::Value;

mod common;

#[tokio::test]
async fn test_hello_without_edge_headers() {
    let server = common::spawn_server(common::fast_config()).await;

    let res = server
        .get_with("/api/hello", &[("user-agent", "edge-tests/1.0"), ("x-real-ip", "198.51.100.4")])
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().get("x-request-id").is_some());
    assert!(res.headers().get("cache-control").is_none());

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["ok"], true);
    assert_eq!(body["edge"]["isEdgeProxied"], false);
    assert_eq!(body["edge"]["explanation"], "not proxied by the edge network");
    assert_eq!(body["request"]["userAgent"], "edge-tests/1.0");
    assert_eq!(body["request"]["realIP"], "198.51.100.4");
    assert_eq!(body["server"]["region"], "local");
}

#[tokio::test]
async fn test_hello_reports_edge_headers() {
    let server = common::spawn_server(common::fast_config()).await;

    let res = server
        .get_with(
            "/api/hello",
            &[
                ("edge-ray-id", "abc123"),
                ("edge-country-code", "AR"),
                ("edge-cache-outcome", "HIT"),
            ],
        )
        .await;
    let body: Value = res.json().await.unwrap();

    assert_eq!(body["edge"]["isEdgeProxied"], true);
    assert_eq!(body["edge"]["rayId"], "abc123");
    assert_eq!(body["edge"]["countryCode"], "AR");
    assert_eq!(body["edge"]["cacheOutcome"], "HIT");
    assert_eq!(body["edge"]["explanation"], "served from edge cache");
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let server = common::spawn_server(common::fast_config()).await;

    let res = server.get_with("/api/hello", &[("x-request-id", "probe-42")]).await;
    assert_eq!(res.headers()["x-request-id"], "probe-42");
}

#[tokio::test]
async fn test_cache_get_is_edge_cacheable() {
    let server = common::spawn_server(common::fast_config()).await;

    let res = server
        .get_with("/api/cache", &[("edge-connecting-ip", "203.0.113.7"), ("edge-cache-outcome", "MISS")])
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()["cache-control"],
        "public, s-maxage=300, stale-while-revalidate=600"
    );
    assert_eq!(res.headers()["cdn-cache-control"], "max-age=300");
    assert_eq!(res.headers()["cloudflare-cdn-cache-control"], "max-age=300");
    assert_eq!(res.headers()["x-cache-strategy"], "Edge-Cache");
    assert!(res.headers().get("x-generated-at").is_some());

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["cache"]["status"], "MISS");
    assert_eq!(body["cache"]["ttl"], "300 seconds (5 minutes)");
    assert_eq!(body["edge"]["explanation"], "cache miss — generated at origin");
    assert!(body["performance"]["serverTime"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_cache_get_without_outcome() {
    let server = common::spawn_server(common::fast_config()).await;

    let body: Value = server.get("/api/cache").await.json().await.unwrap();
    assert_eq!(body["cache"]["status"], "not available");
    assert!(body["edge"]["cacheOutcome"].is_null());
}

#[tokio::test]
async fn test_cache_post_is_never_cached() {
    let server = common::spawn_server(common::fast_config()).await;

    let res = server
        .client
        .post(server.url("/api/cache"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["cache-control"], "no-cache, no-store, must-revalidate");
    assert_eq!(res.headers()["x-cache-strategy"], "No-Cache");
    assert!(res.headers().get("cdn-cache-control").is_none());

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["method"], "POST");
    assert_eq!(body["cache"]["reason"], "POST requests are not cached by default");
}

#[tokio::test]
async fn test_strategies() {
    let server = common::spawn_server(common::fast_config()).await;

    let cases = [
        ("?strategy=long", "public, s-maxage=3600, stale-while-revalidate=7200", "max-age=3600", "long"),
        ("?strategy=short", "public, s-maxage=30, stale-while-revalidate=60", "max-age=30", "short"),
        ("?strategy=none", "no-cache, no-store, must-revalidate", "no-cache", "none"),
        ("?strategy=stale", "public, s-maxage=60, stale-while-revalidate=300", "max-age=60", "stale"),
        ("", "public, s-maxage=300, stale-while-revalidate=600", "max-age=300", "default"),
        ("?strategy=", "public, s-maxage=300, stale-while-revalidate=600", "max-age=300", "default"),
        ("?strategy=weekly", "public, s-maxage=300, stale-while-revalidate=600", "max-age=300", "weekly"),
    ];

    for (query, cache_control, cdn, label) in cases {
        let res = server.get(&format!("/api/strategies{}", query)).await;
        assert_eq!(res.status(), StatusCode::OK, "{}", query);
        assert_eq!(res.headers()["cache-control"], cache_control, "{}", query);
        assert_eq!(res.headers()["cdn-cache-control"], cdn, "{}", query);
        assert_eq!(res.headers()["x-cache-strategy"], label, "{}", query);
        assert!(res.headers().get("x-generated-at").is_some());

        let body: Value = res.json().await.unwrap();
        assert_eq!(body["strategy"], label);
        assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
    }
}

#[tokio::test]
async fn test_slow_endpoint_waits() {
    let mut config = common::fast_config();
    config.latency.slow_ms = 150;
    let server = common::spawn_server(config).await;

    let start = Instant::now();
    let res = server.get("/api/slow").await;
    assert!(start.elapsed() >= Duration::from_millis(150));

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["ok"], true);
    assert_eq!(body["simulatedLatencyMs"], 150);
}

#[tokio::test]
async fn test_request_timeout() {
    let mut config = common::fast_config();
    // Bypasses validation on purpose: the delay outlives the timeout.
    config.timeouts.request_secs = 1;
    config.latency.slow_ms = 1500;
    let server = common::spawn_server(config).await;

    let res = server.get("/api/slow").await;
    assert_eq!(res.status(), StatusCode::REQUEST_TIMEOUT);
}

#[tokio::test]
async fn test_config_update_switches_header_profile() {
    let server = common::spawn_server(common::fast_config()).await;
    let cf_headers = [("cf-ray", "8a1b2c3d4e5f-EZE"), ("cf-cache-status", "STALE")];

    let body: Value = server.get_with("/api/hello", &cf_headers).await.json().await.unwrap();
    assert_eq!(body["edge"]["isEdgeProxied"], false);

    let mut config = common::fast_config();
    config.edge.header_profile = HeaderProfile::Cloudflare;
    config.site.region = "sa-east-1".into();
    server.updates.send(config).unwrap();

    let deadline = Instant::now() + Duration::from_secs(2);
    loop {
        let body: Value = server.get_with("/api/hello", &cf_headers).await.json().await.unwrap();
        if body["edge"]["isEdgeProxied"] == true {
            assert_eq!(body["edge"]["explanation"], "stale content served while regenerating");
            assert_eq!(body["server"]["region"], "sa-east-1");
            break;
        }
        assert!(Instant::now() < deadline, "config update was not applied");
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
}

#[tokio::test]
async fn test_health() {
    let server = common::spawn_server(common::fast_config()).await;

    let res = server.get("/health").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), "ok");
}
