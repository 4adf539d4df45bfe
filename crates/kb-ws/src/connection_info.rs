use crate::{ConnectionId, WsMessage};

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;

/// A live subscriber as seen by the registry
#[derive(Debug, Clone)]
pub struct ConnectionInfo {
    pub connection_id: ConnectionId,
    pub connected_at: DateTime<Utc>,
    /// Outbound queue drained by the connection's writer task
    pub sender: mpsc::Sender<WsMessage>,
}

impl ConnectionInfo {
    pub fn new(sender: mpsc::Sender<WsMessage>) -> Self {
        Self {
            connection_id: ConnectionId::new(),
            connected_at: Utc::now(),
            sender,
        }
    }
}
