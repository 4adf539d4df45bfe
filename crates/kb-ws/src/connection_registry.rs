use crate::{
    ConnectionId, ConnectionInfo, ConnectionLimits, Result as WsErrorResult, WsError, WsMessage,
};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::{debug, info, warn};
use tokio::sync::{RwLock, mpsc};

/// Registry for tracking active WebSocket connections.
///
/// Membership changes take the write lock only for the map update. Readers
/// copy the membership out and release the lock before doing any I/O, so a
/// slow subscriber never holds up `remove`.
pub struct ConnectionRegistry {
    inner: Arc<RwLock<RegistryInner>>,
    limits: ConnectionLimits,
}

struct RegistryInner {
    /// All active connections by connection_id
    connections: HashMap<ConnectionId, ConnectionInfo>,
}

impl ConnectionRegistry {
    pub fn new(limits: ConnectionLimits) -> Self {
        Self {
            inner: Arc::new(RwLock::new(RegistryInner {
                connections: HashMap::new(),
            })),
            limits,
        }
    }

    /// Register a new connection for the given outbound queue
    pub async fn register(&self, sender: mpsc::Sender<WsMessage>) -> WsErrorResult<ConnectionId> {
        let info = ConnectionInfo::new(sender);
        let connection_id = info.connection_id;
        self.add(info).await?;
        Ok(connection_id)
    }

    /// Add a connection. Returns `Ok(false)` if it is already registered.
    pub async fn add(&self, info: ConnectionInfo) -> WsErrorResult<bool> {
        let mut inner = self.inner.write().await;

        if inner.connections.contains_key(&info.connection_id) {
            debug!("Connection {} already registered", info.connection_id);
            return Ok(false);
        }

        // Check total connection limit
        if inner.connections.len() >= self.limits.max_total {
            warn!(
                "Total connection limit reached: {}/{}",
                inner.connections.len(),
                self.limits.max_total
            );
            return Err(WsError::ConnectionLimitExceeded {
                current: inner.connections.len(),
                max: self.limits.max_total,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let connection_id = info.connection_id;
        inner.connections.insert(connection_id, info);
        info!(
            "Registered connection {connection_id} ({} total)",
            inner.connections.len()
        );

        Ok(true)
    }

    /// Remove a connection. Returns `false` if it was not registered.
    pub async fn remove(&self, connection_id: ConnectionId) -> bool {
        let mut inner = self.inner.write().await;

        if inner.connections.remove(&connection_id).is_some() {
            info!(
                "Unregistered connection {connection_id} ({} total remaining)",
                inner.connections.len()
            );
            true
        } else {
            false
        }
    }

    /// Consistent copy of the current membership
    pub async fn snapshot(&self) -> Vec<ConnectionInfo> {
        let inner = self.inner.read().await;
        inner.connections.values().cloned().collect()
    }

    /// Visit every connection in a snapshot. The lock is released before `f` runs.
    pub async fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&ConnectionInfo),
    {
        for info in self.snapshot().await.iter() {
            f(info);
        }
    }

    /// Get information about a specific connection
    pub async fn get(&self, connection_id: ConnectionId) -> Option<ConnectionInfo> {
        let inner = self.inner.read().await;
        inner.connections.get(&connection_id).cloned()
    }

    /// Get total connection count
    pub async fn total_count(&self) -> usize {
        let inner = self.inner.read().await;
        inner.connections.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.total_count().await == 0
    }

    /// Whether another connection would be accepted right now
    pub async fn has_capacity(&self) -> bool {
        self.total_count().await < self.limits.max_total
    }

    pub fn limits(&self) -> &ConnectionLimits {
        &self.limits
    }
}

impl Clone for ConnectionRegistry {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            limits: self.limits.clone(),
        }
    }
}
