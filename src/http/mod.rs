//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, edge classification, simulated latency)
//!     → pages / api handlers
//!     → response.rs (caching headers, generation timestamp)
//!     → Send to client (or to the edge proxy in front of us)
//! ```

pub mod error;
pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use error::SiteError;
pub use request::{edge_info, request_id, UuidRequestId, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
