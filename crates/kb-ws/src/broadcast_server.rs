use crate::{
    AppState, BroadcastInfo, ConnectionConfig, ConnectionLimits, ConnectionRegistry, Metrics,
    PayloadValidator, Result as WsErrorResult, ShutdownCoordinator, WsError, handler,
    health::health_check,
};

use std::panic::Location;

use axum::{
    Router,
    extract::ws::{Message, Utf8Bytes},
    routing::get,
};
use error_location::ErrorLocation;
use log::{debug, info, warn};
use tokio::net::TcpListener;
use tokio::sync::mpsc::error::TrySendError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 9002;

#[derive(Debug, Clone)]
pub struct BroadcastServerConfig {
    pub host: String,
    pub port: u16,
    pub limits: ConnectionLimits,
    pub connection: ConnectionConfig,
}

impl Default for BroadcastServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            limits: ConnectionLimits::default(),
            connection: ConnectionConfig::default(),
        }
    }
}

/// WebSocket endpoint that fans validated payloads out to every subscriber.
///
/// Cloning is cheap; clones share the registry and the shutdown signal.
#[derive(Clone)]
pub struct BroadcastServer {
    config: BroadcastServerConfig,
    state: AppState,
}

impl BroadcastServer {
    pub fn new(config: BroadcastServerConfig) -> Self {
        let state = AppState {
            registry: ConnectionRegistry::new(config.limits.clone()),
            metrics: Metrics::new(),
            shutdown: ShutdownCoordinator::new(),
            config: config.connection.clone(),
        };

        Self { config, state }
    }

    /// Build the application router with all endpoints
    pub fn router(&self) -> Router {
        Router::new()
            .route("/", get(handler))
            .route("/ws", get(handler))
            .route("/health", get(health_check))
            .with_state(self.state.clone())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Bind the configured address and serve until `stop()` is called
    pub async fn start(&self) -> WsErrorResult<()> {
        let addr = self.bind_addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| WsError::Bind {
                addr: addr.clone(),
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.serve(listener).await
    }

    /// Serve on an already-bound listener until `stop()` is called
    pub async fn serve(&self, listener: TcpListener) -> WsErrorResult<()> {
        if let Ok(addr) = listener.local_addr() {
            info!("WebSocket server listening on ws://{addr}");
        }

        let mut shutdown_guard = self.state.shutdown.subscribe_guard();

        axum::serve(listener, self.router())
            .with_graceful_shutdown(async move {
                shutdown_guard.wait().await;
                info!("WebSocket server stopped accepting connections");
            })
            .await
            .map_err(|source| WsError::Serve {
                source,
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Signal every session and the serve loop to finish. Idempotent.
    pub fn stop(&self) {
        self.state.shutdown.shutdown();
    }

    pub fn is_stopped(&self) -> bool {
        self.state.shutdown.is_shutdown()
    }

    /// Validate `raw` and relay it verbatim to every connected subscriber.
    ///
    /// Returns `false` only when validation fails. Per-connection send
    /// failures are logged and do not change the result.
    pub async fn broadcast(&self, raw: &str) -> bool {
        self.fan_out(raw).await.is_ok()
    }

    /// Same as [`broadcast`](Self::broadcast), reporting per-connection results
    pub async fn fan_out(&self, raw: &str) -> WsErrorResult<BroadcastInfo> {
        if let Err(e) = PayloadValidator::validate(raw) {
            warn!("Refusing to broadcast invalid payload: {e}");
            self.state.metrics.payload_rejected(e.kind());
            return Err(e.into());
        }

        let frame = Utf8Bytes::from(raw.to_owned());
        let mut info = BroadcastInfo::default();

        for connection in self.state.registry.snapshot().await {
            info.recipients += 1;

            match connection.sender.try_send(Message::Text(frame.clone())) {
                Ok(()) => info.delivered += 1,
                Err(TrySendError::Full(_)) => {
                    warn!(
                        "Send buffer full for connection {}, dropping broadcast",
                        connection.connection_id
                    );
                    self.state.metrics.error_occurred("send_buffer_full");
                    info.dropped += 1;
                }
                Err(TrySendError::Closed(_)) => {
                    debug!(
                        "Connection {} closed before broadcast",
                        connection.connection_id
                    );
                    info.dropped += 1;
                }
            }
        }

        self.state
            .metrics
            .broadcast_published(info.delivered, info.dropped);
        debug!(
            "Broadcast to {} connections ({} delivered, {} dropped)",
            info.recipients, info.delivered, info.dropped
        );

        Ok(info)
    }

    pub fn registry(&self) -> &ConnectionRegistry {
        &self.state.registry
    }

    pub fn shutdown_coordinator(&self) -> &ShutdownCoordinator {
        &self.state.shutdown
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn config(&self) -> &BroadcastServerConfig {
        &self.config
    }
}
