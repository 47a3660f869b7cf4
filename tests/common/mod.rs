//! Shared utilities for integration tests.

use std::time::Duration;

use edge_cache_demo::config::LatencyConfig;
use edge_cache_demo::{DemoConfig, HttpServer, Shutdown};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

/// A demo server running on an ephemeral port. Shuts down when dropped.
pub struct TestServer {
    pub base_url: String,
    pub client: reqwest::Client,
    #[allow(dead_code)]
    pub updates: mpsc::UnboundedSender<DemoConfig>,
    shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client.get(self.url(path)).send().await.unwrap()
    }

    /// GET with extra request headers.
    pub async fn get_with(&self, path: &str, headers: &[(&str, &str)]) -> reqwest::Response {
        let mut request = self.client.get(self.url(path));
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        request.send().await.unwrap()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Default configuration with every simulated delay removed.
pub fn fast_config() -> DemoConfig {
    DemoConfig {
        latency: LatencyConfig::none(),
        ..DemoConfig::default()
    }
}

pub async fn spawn_server(config: DemoConfig) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let (updates, config_updates) = mpsc::unbounded_channel();
    let server = HttpServer::new(config);
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, config_updates, server_shutdown).await;
    });

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .unwrap();

    TestServer {
        base_url: format!("http://{}", addr),
        client,
        updates,
        shutdown,
    }
}
