//! Zion Rental Backend
//!
//! ```text
//!     Client Request      ┌──────────┐    ┌───────────────────────┐
//!     ───────────────────▶│   net    │───▶│ http server           │
//!                         │ listener │    │  trace → request id   │
//!                         └──────────┘    │  → timeout → handler  │
//!     Client Response                     └───────────┬───────────┘
//!     ◀───────────────────────────────────────────────┘
//!
//!     GET /        → "Welcome to Zion Rental Backend!"
//!     GET /health  → {"status":"OK"}
//! ```

use anyhow::Context;

use zion_rental_backend::config::loader::load_from_env;
use zion_rental_backend::lifecycle::{self, Shutdown};
use zion_rental_backend::observability;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_from_env().context("failed to load configuration")?;

    observability::init_logging(&config.observability)
        .context("failed to initialise logging")?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let shutdown = Shutdown::new();
    lifecycle::serve(config, shutdown.subscribe())
        .await
        .context("server failed")?;

    tracing::info!("Shutdown complete");
    Ok(())
}
