//! Edge caching demo site library.

pub mod api;
pub mod config;
pub mod edge;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod pages;
pub mod strategy;

pub use config::schema::DemoConfig;
pub use edge::{classify, classify_with, EdgeRequestInfo};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
