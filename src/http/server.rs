//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all page and API handlers
//! - Wire up middleware (request ID, tracing, timeout, metrics)
//! - Bind server to listener
//! - Apply configuration updates while running
//! - Stop gracefully on shutdown

use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwap;
use axum::{
    body::Body,
    http::Request,
    middleware,
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use tokio::net::TcpListener;
use tokio::sync::{broadcast, mpsc};
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::DemoConfig;
use crate::http::middleware::track_requests;
use crate::http::request::{UuidRequestId, X_REQUEST_ID};
use crate::lifecycle::shutdown::wait as wait_for_shutdown;
use crate::{api, pages};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ArcSwap<DemoConfig>>,
    started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: DemoConfig) -> Self {
        Self {
            config: Arc::new(ArcSwap::from_pointee(config)),
            started_at: Utc::now(),
        }
    }

    /// Snapshot of the current configuration.
    pub fn config(&self) -> Arc<DemoConfig> {
        self.config.load_full()
    }

    /// When this process started; stands in for the static build time.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Swap in a new configuration. Listener and timeout changes need a restart.
    pub fn update_config(&self, mut new_config: DemoConfig) {
        let current = self.config.load();
        if current.listener.bind_address != new_config.listener.bind_address {
            tracing::warn!(
                current = %current.listener.bind_address,
                requested = %new_config.listener.bind_address,
                "Bind address change requires a restart; ignoring it"
            );
        }
        if current.timeouts.request_secs != new_config.timeouts.request_secs {
            tracing::warn!("Request timeout change requires a restart; ignoring it");
        }
        new_config.listener = current.listener.clone();
        new_config.timeouts = current.timeouts.clone();

        tracing::info!(
            header_profile = %new_config.edge.header_profile,
            region = %new_config.site.region,
            "Configuration updated"
        );
        self.config.store(Arc::new(new_config));
    }
}

/// HTTP server for the demo site.
pub struct HttpServer {
    router: Router,
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: DemoConfig) -> Self {
        let request_timeout = Duration::from_secs(config.timeouts.request_secs);
        let state = AppState::new(config);
        let router = Self::build_router(request_timeout, state.clone());
        Self { router, state }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(request_timeout: Duration, state: AppState) -> Router {
        Router::new()
            .merge(pages::setup_pages_router())
            .merge(api::setup_api_router())
            .route("/health", get(health))
            .route_layer(middleware::from_fn(track_requests))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
                    .layer(TraceLayer::new_for_http().make_span_with(
                        |request: &Request<Body>| {
                            let request_id = request
                                .headers()
                                .get(X_REQUEST_ID)
                                .and_then(|v| v.to_str().ok())
                                .unwrap_or("unknown");
                            tracing::info_span!(
                                "request",
                                method = %request.method(),
                                path = %request.uri().path(),
                                request_id = %request_id,
                            )
                        },
                    ))
                    .layer(PropagateRequestIdLayer::x_request_id())
                    .layer(TimeoutLayer::new(request_timeout)),
            )
    }

    /// Run the server until `shutdown` fires, applying `config_updates` as they arrive.
    pub async fn run(
        self,
        listener: TcpListener,
        config_updates: mpsc::UnboundedReceiver<DemoConfig>,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let updates = tokio::spawn(apply_config_updates(
            self.state.clone(),
            config_updates,
            shutdown.resubscribe(),
        ));

        axum::serve(listener, self.router)
            .with_graceful_shutdown(wait_for_shutdown(shutdown))
            .await?;

        updates.abort();
        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

async fn apply_config_updates(
    state: AppState,
    mut updates: mpsc::UnboundedReceiver<DemoConfig>,
    mut shutdown: broadcast::Receiver<()>,
) {
    loop {
        tokio::select! {
            update = updates.recv() => match update {
                Some(new_config) => state.update_config(new_config),
                None => break,
            },
            _ = shutdown.recv() => break,
        }
    }
}

async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::HeaderProfile;

    #[test]
    fn test_update_keeps_listener_and_timeouts() {
        let state = AppState::new(DemoConfig::default());

        let mut next = DemoConfig::default();
        next.listener.bind_address = "127.0.0.1:4000".to_string();
        next.timeouts.request_secs = 5;
        next.edge.header_profile = HeaderProfile::Cloudflare;
        next.site.region = "sa-east-1".to_string();
        state.update_config(next);

        let live = state.config();
        assert_eq!(live.listener.bind_address, "0.0.0.0:3000");
        assert_eq!(live.timeouts.request_secs, 30);
        assert_eq!(live.edge.header_profile, HeaderProfile::Cloudflare);
        assert_eq!(live.site.region, "sa-east-1");
    }
}
