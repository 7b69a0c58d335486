//! TCP listener binding.
//!
//! # Responsibilities
//! - Resolve the configured bind address
//! - Bind the socket; failure here is fatal to startup
//!
//! Binding does not set `SO_REUSEPORT`, so a second process on the same
//! port fails with `AddrInUse` instead of sharing the socket.

use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::config::ListenerConfig;

/// Error type for listener operations.
#[derive(Debug, thiserror::Error)]
pub enum ListenerError {
    /// The configured address could not be parsed.
    #[error("Invalid bind address '{address}': {source}")]
    InvalidAddress {
        address: String,
        source: std::net::AddrParseError,
    },
    /// Failed to bind to address.
    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: SocketAddr,
        source: std::io::Error,
    },
}

impl ListenerError {
    /// True when the port is already held by another socket.
    pub fn is_addr_in_use(&self) -> bool {
        matches!(
            self,
            ListenerError::Bind { source, .. } if source.kind() == std::io::ErrorKind::AddrInUse
        )
    }
}

/// Bind a TCP listener to the configured address.
pub async fn bind(config: &ListenerConfig) -> Result<TcpListener, ListenerError> {
    let addr: SocketAddr = config
        .bind_address
        .parse()
        .map_err(|source| ListenerError::InvalidAddress {
            address: config.bind_address.clone(),
            source,
        })?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ListenerError::Bind { address: addr, source })?;

    if let Ok(local_addr) = listener.local_addr() {
        tracing::info!(address = %local_addr, "Listener bound");
    }

    Ok(listener)
}
