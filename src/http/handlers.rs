//! Route handlers.
//!
//! Both handlers are unconditional: they read nothing from the request and
//! touch no state.

use axum::Json;
use serde::Serialize;

/// Body served at `GET /`.
pub const WELCOME_MESSAGE: &str = "Welcome to Zion Rental Backend!";

/// Liveness payload served at `GET /health`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: &'static str,
}

impl HealthStatus {
    pub const OK: Self = Self { status: "OK" };
}

/// `GET /` → `text/plain` welcome message.
pub async fn root() -> &'static str {
    WELCOME_MESSAGE
}

/// `GET /health` → `{"status":"OK"}`.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::OK)
}
