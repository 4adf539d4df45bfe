use crate::{
    ConnectionConfig, ConnectionId, ConnectionRegistry, Metrics, PayloadValidator,
    Result as WsErrorResult, ShutdownGuard, WsError,
};

use std::panic::Location;

use axum::extract::ws::{Message, WebSocket};
use error_location::ErrorLocation;
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

/// Manages a single WebSocket connection.
///
/// Inbound payloads are never relayed to other subscribers. A valid payload
/// is echoed back to its sender; anything else is logged and dropped.
pub struct WebSocketConnection {
    registry: ConnectionRegistry,
    config: ConnectionConfig,
    metrics: Metrics,
}

impl WebSocketConnection {
    pub fn new(registry: ConnectionRegistry, config: ConnectionConfig, metrics: Metrics) -> Self {
        Self {
            registry,
            config,
            metrics,
        }
    }

    /// Handle the WebSocket connection lifecycle
    pub async fn handle(
        self,
        socket: WebSocket,
        mut shutdown_guard: ShutdownGuard,
    ) -> WsErrorResult<()> {
        // Split socket into sender and receiver
        let (mut ws_sender, mut ws_receiver) = socket.split();

        // Create bounded channel for outgoing messages (backpressure handling)
        let (tx, mut rx) = mpsc::channel::<Message>(self.config.send_buffer_size);

        let connection_id = match self.registry.register(tx.clone()).await {
            Ok(connection_id) => connection_id,
            Err(e) => {
                self.metrics.connection_rejected("limit");
                let _ = ws_sender.send(Message::Close(None)).await;
                return Err(e);
            }
        };

        log::info!("WebSocket connection {connection_id} established");
        self.metrics.connection_established();

        // Spawn send task
        let send_task = tokio::spawn(async move {
            while let Some(msg) = rx.recv().await {
                if ws_sender.send(msg).await.is_err() {
                    break;
                }
            }
        });

        let result = loop {
            tokio::select! {
                msg = ws_receiver.next() => {
                    match msg {
                        Some(Ok(Message::Close(_))) => {
                            log::info!("Received close frame from connection {connection_id}");
                            break Ok(());
                        }
                        Some(Ok(msg)) => {
                            if let Err(e) = self.handle_client_message(connection_id, msg, &tx).await {
                                log::error!(
                                    "Error handling message from connection {connection_id}: {e}"
                                );
                                self.metrics.error_occurred(e.error_code());
                                break Err(e);
                            }
                        }
                        Some(Err(e)) => {
                            log::error!("WebSocket error on connection {connection_id}: {e}");
                            let e = WsError::ConnectionClosed {
                                reason: format!("WebSocket error: {e}"),
                                location: ErrorLocation::from(Location::caller()),
                            };
                            self.metrics.error_occurred(e.error_code());
                            break Err(e);
                        }
                        None => {
                            log::info!("Connection {connection_id} closed by client");
                            break Ok(());
                        }
                    }
                }

                _ = shutdown_guard.wait() => {
                    log::info!("Shutting down connection {connection_id} gracefully");
                    if tx.try_send(Message::Close(None)).is_err() {
                        log::warn!("Could not queue close frame for connection {connection_id}");
                    }
                    break Ok(());
                }
            }
        };

        // Cleanup. The registry holds a sender clone, so remove first or the
        // send task never sees its channel close.
        self.registry.remove(connection_id).await;
        drop(tx);
        let abort = send_task.abort_handle();
        if tokio::time::timeout(self.config.close_timeout, send_task)
            .await
            .is_err()
        {
            log::warn!("Writer for connection {connection_id} stalled, aborting");
            abort.abort();
        }

        self.metrics
            .connection_closed(if result.is_ok() { "normal" } else { "error" });

        log::info!("WebSocket connection {connection_id} closed");

        result
    }

    /// Handle a message from the client
    pub(crate) async fn handle_client_message(
        &self,
        connection_id: ConnectionId,
        msg: Message,
        tx: &mpsc::Sender<Message>,
    ) -> WsErrorResult<()> {
        match msg {
            Message::Text(text) => {
                self.metrics.message_received("text");
                if self.is_relayable(connection_id, text.as_str()) {
                    self.echo(connection_id, Message::Text(text), tx);
                }
                Ok(())
            }
            Message::Binary(data) => {
                self.metrics.message_received("binary");
                match std::str::from_utf8(&data) {
                    Ok(text) => {
                        if self.is_relayable(connection_id, text) {
                            self.echo(connection_id, Message::Binary(data.clone()), tx);
                        }
                    }
                    Err(e) => {
                        log::warn!(
                            "Dropping binary frame from connection {connection_id}: not UTF-8 ({e})"
                        );
                        self.metrics.payload_rejected("malformed");
                    }
                }
                Ok(())
            }
            Message::Ping(data) => match tx.try_send(Message::Pong(data)) {
                Ok(()) => Ok(()),
                Err(TrySendError::Full(_)) => {
                    log::warn!("Send buffer full for connection {connection_id}, pong dropped");
                    self.metrics.error_occurred("send_buffer_full");
                    Ok(())
                }
                Err(TrySendError::Closed(_)) => Err(WsError::ConnectionClosed {
                    reason: "outbound channel closed before pong".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }),
            },
            Message::Pong(_) => {
                // Heartbeat response received
                Ok(())
            }
            Message::Close(_) => Ok(()),
        }
    }

    fn is_relayable(&self, connection_id: ConnectionId, raw: &str) -> bool {
        match PayloadValidator::validate(raw) {
            Ok(_) => true,
            Err(e) => {
                log::warn!("Dropping invalid payload from connection {connection_id}: {e}");
                self.metrics.payload_rejected(e.kind());
                false
            }
        }
    }

    /// Queue a reply to this connection only
    fn echo(&self, connection_id: ConnectionId, msg: Message, tx: &mpsc::Sender<Message>) {
        match tx.try_send(msg) {
            Ok(()) => self.metrics.message_sent("echo"),
            Err(TrySendError::Full(_)) => {
                log::warn!("Send buffer full for connection {connection_id}, echo dropped");
                self.metrics.error_occurred("send_buffer_full");
            }
            Err(TrySendError::Closed(_)) => {
                log::debug!("Connection {connection_id} closed before echo");
            }
        }
    }
}
