//! Edge caching demo site.
//!
//! Serves pages and JSON endpoints that each advertise a different caching
//! policy, and reports back what the edge proxy in front of the origin said
//! about the request.
//!
//! # Architecture Overview
//!
//! ```text
//!                         ┌──────────────────────────────────────────────┐
//!   Client ──▶ Edge proxy │                 ORIGIN (this)                 │
//!              (CDN)  ────┼─▶ http::server ──▶ pages / api handlers       │
//!                         │        │                 │                    │
//!                         │        │                 ├─▶ edge::classify   │
//!                         │        │                 └─▶ strategy policy  │
//!                         │        ▼                                      │
//!                         │  request id · tracing · timeout · metrics     │
//!                         │                                              │
//!                         │  config (toml, hot reload) · lifecycle       │
//!                         └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use edge_cache_demo::config::{load_config, validate_config, watcher::ConfigWatcher, ConfigError};
use edge_cache_demo::lifecycle::signals;
use edge_cache_demo::observability::{logging, metrics};
use edge_cache_demo::{DemoConfig, HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "edge-cache-demo")]
#[command(about = "Demo origin for CDN caching strategies", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,

    /// Reload the configuration file when it changes.
    #[arg(long, requires = "config")]
    watch: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => DemoConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    logging::init(&config.observability);

    tracing::info!("edge-cache-demo v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        header_profile = %config.edge.header_profile,
        region = %config.site.region,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        // Address was checked by validation.
        let addr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    signals::listen(shutdown.clone());

    // The watcher stops when dropped, so it lives until main returns.
    let (_watcher, config_updates) = match (&args.config, args.watch) {
        (Some(path), true) => {
            let (watcher, updates) = ConfigWatcher::new(path);
            (Some(watcher.run()?), updates)
        }
        _ => {
            let (_, updates) = mpsc::unbounded_channel();
            (None, updates)
        }
    };

    let server = HttpServer::new(config);
    server.run(listener, config_updates, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
