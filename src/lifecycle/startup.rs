//! Startup orchestration.
//!
//! Fail fast: a listener that cannot bind aborts startup before any
//! request is served.

use crate::config::AppConfig;
use crate::http::HttpServer;
use crate::net::{self, ListenerError};

/// Fatal errors from starting or running the service.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Listener(#[from] ListenerError),

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Bind the configured address and serve until shutdown.
pub async fn serve(
    config: AppConfig,
    shutdown: tokio::sync::broadcast::Receiver<()>,
) -> Result<(), StartupError> {
    let listener = net::bind(&config.listener).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!("Server running on http://localhost:{}", local_addr.port());

    HttpServer::new(config).run(listener, shutdown).await?;
    Ok(())
}
