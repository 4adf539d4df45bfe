use async_trait::async_trait;
use kb_ws::BroadcastServer;

/// Destination for decoded records
#[async_trait]
pub trait Forwarder: Send + Sync {
    /// Relay one JSON payload. `false` means it was refused.
    async fn forward(&self, payload: &str) -> bool;
}

#[async_trait]
impl Forwarder for BroadcastServer {
    async fn forward(&self, payload: &str) -> bool {
        self.broadcast(payload).await
    }
}
