#![allow(dead_code)]

use axum_test::{TestServer, TestWebSocket, WsMessage};
use bytes::Bytes;
use tokio::time::{Duration, timeout};

/// WebSocket test client wrapper
pub struct WsTestClient {
    ws: TestWebSocket,
}

impl WsTestClient {
    /// Connect to the broadcast endpoint
    pub async fn connect(server: &TestServer) -> Self {
        Self::connect_to(server, "/ws").await
    }

    pub async fn connect_to(server: &TestServer, path: &str) -> Self {
        let ws = server.get_websocket(path).await.into_websocket().await;

        Self { ws }
    }

    /// Send text message
    pub async fn send_text(&mut self, text: impl std::fmt::Display) {
        self.ws.send_text(text).await;
    }

    /// Send binary message
    pub async fn send_binary(&mut self, data: impl Into<Bytes>) {
        self.ws.send_message(WsMessage::Binary(data.into())).await;
    }

    /// Receive text message
    pub async fn receive_text(&mut self) -> String {
        self.ws.receive_text().await
    }

    /// Receive binary message
    pub async fn receive_binary(&mut self) -> Bytes {
        self.ws.receive_bytes().await
    }

    /// Receive text, or `None` if nothing arrives within `wait`
    pub async fn try_receive_text(&mut self, wait: Duration) -> Option<String> {
        timeout(wait, self.ws.receive_text()).await.ok()
    }

    /// Close the WebSocket connection
    pub async fn close(self) {
        self.ws.close().await;
    }
}
