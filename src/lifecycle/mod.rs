//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Shutdown::trigger
//!
//! Shutdown (shutdown.rs):
//!     trigger → HTTP server stops accepting → in-flight requests drain → exit
//!            → config update loop exits
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
