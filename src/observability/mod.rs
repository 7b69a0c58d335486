//! Observability subsystem.
//!
//! Structured logging via `tracing`. Request spans come from the trace
//! layer in `http::server` and carry the request ID.

pub mod logging;

pub use logging::init_logging;
