//! Shutdown coordination.
//!
//! `main` holds one `Shutdown` and hands a receiver to `HttpServer::run`;
//! tests trigger it to stop a server without sending a signal.

use tokio::sync::broadcast;

/// Broadcast handle that stops every subscribed server.
///
/// A server that receives the broadcast stops accepting and drains its
/// open connections before `run` returns.
#[derive(Debug, Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Receiver for one server's graceful-shutdown future.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Stop all subscribed servers. Nothing happens if none are running.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }

    /// Number of servers still holding a receiver.
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
