//! Shutdown coordination for the gateway.

use tokio::sync::broadcast;

/// Programmatic shutdown trigger.
///
/// Each [`crate::http::HttpServer::run`] holds a receiver; `trigger` stops all
/// of them. Dropping the coordinator does not stop anything.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
