use crate::{
    ConnectionConfig, ConnectionRegistry, Metrics, ShutdownCoordinator, WebSocketConnection,
};

use axum::{
    extract::{
        State,
        ws::{WebSocket, WebSocketUpgrade},
    },
    http::StatusCode,
    response::Response,
};
use log::{debug, error, warn};

/// Shared application state for WebSocket handlers
#[derive(Clone)]
pub struct AppState {
    pub registry: ConnectionRegistry,
    pub metrics: Metrics,
    pub shutdown: ShutdownCoordinator,
    pub config: ConnectionConfig,
}

/// WebSocket upgrade handler
pub async fn handler(
    State(state): State<AppState>,
    ws: WebSocketUpgrade,
) -> Result<Response, StatusCode> {
    if state.shutdown.is_shutdown() {
        debug!("Refusing WebSocket upgrade during shutdown");
        state.metrics.connection_rejected("shutdown");
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }

    if !state.registry.has_capacity().await {
        warn!(
            "Refusing WebSocket upgrade: {} connections already open",
            state.registry.limits().max_total
        );
        state.metrics.connection_rejected("limit");
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }

    Ok(ws.on_upgrade(move |socket| handle_socket(socket, state)))
}

/// Handle WebSocket connection after upgrade
async fn handle_socket(socket: WebSocket, state: AppState) {
    let shutdown_guard = state.shutdown.subscribe_guard();

    let connection = WebSocketConnection::new(
        state.registry.clone(),
        state.config.clone(),
        state.metrics.clone(),
    );

    if let Err(e) = connection.handle(socket, shutdown_guard).await {
        error!("WebSocket session ended with error: {e}");
    }
}
