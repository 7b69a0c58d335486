//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TcpListener
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (assign request ID)
//!     → handlers.rs (fixed responses)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod server;

pub use handlers::{HealthStatus, WELCOME_MESSAGE};
pub use request::X_REQUEST_ID;
pub use server::HttpServer;
