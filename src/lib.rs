//! Zion Rental Backend library.
//!
//! Serves a welcome message at `GET /` and a liveness probe at
//! `GET /health`, on port 3000 unless configured otherwise.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
