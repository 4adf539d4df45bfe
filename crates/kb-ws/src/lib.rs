pub mod app_state;
pub mod broadcast_info;
pub mod broadcast_server;
pub mod connection_config;
pub mod connection_id;
pub mod connection_info;
pub mod connection_limits;
pub mod connection_registry;
pub mod error;
pub mod health;
pub mod metrics;
pub mod payload_error;
pub mod payload_validator;
pub mod shutdown_coordinator;
pub mod shutdown_guard;
pub mod validated_payload;
pub mod web_socket_connection;

pub use app_state::{AppState, handler};
pub use broadcast_info::BroadcastInfo;
pub use broadcast_server::{BroadcastServer, BroadcastServerConfig, DEFAULT_HOST, DEFAULT_PORT};
pub use connection_config::ConnectionConfig;
pub use connection_id::ConnectionId;
pub use connection_info::ConnectionInfo;
pub use connection_limits::ConnectionLimits;
pub use connection_registry::ConnectionRegistry;
pub use error::{Result, WsError};
pub use metrics::Metrics;
pub use payload_error::PayloadError;
pub use payload_validator::PayloadValidator;
pub use shutdown_coordinator::ShutdownCoordinator;
pub use shutdown_guard::ShutdownGuard;
pub use validated_payload::ValidatedPayload;
pub use web_socket_connection::WebSocketConnection;

/// Frame type carried on every connection's outbound channel
pub use axum::extract::ws::Message as WsMessage;

#[cfg(test)]
mod tests;
