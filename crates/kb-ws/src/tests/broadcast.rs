use crate::{
    BroadcastServer, BroadcastServerConfig, ConnectionLimits, WsError, WsMessage,
};

use tokio::sync::mpsc;

const VALID: &str = r#"{"id":"123","content":"Hello, Kafka!","timestamp":1700000000}"#;

fn server() -> BroadcastServer {
    BroadcastServer::new(BroadcastServerConfig::default())
}

fn text_of(message: WsMessage) -> String {
    match message {
        WsMessage::Text(text) => text.as_str().to_owned(),
        other => panic!("expected text frame, got {other:?}"),
    }
}

#[tokio::test]
async fn given_no_connections_when_broadcast_valid_payload_then_true() {
    let server = server();

    assert!(server.broadcast(VALID).await);
}

#[tokio::test]
async fn given_invalid_payload_when_broadcast_then_false_and_nothing_sent() {
    let server = server();
    let (tx, mut rx) = mpsc::channel(8);
    server.registry().register(tx).await.expect("register");

    let delivered = server.broadcast(r#"{"id":"","content":"x","timestamp":1}"#).await;

    assert!(!delivered);
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn given_invalid_payload_when_fan_out_then_invalid_payload_error() {
    let server = server();

    let result = server.fan_out("{}").await;

    assert!(matches!(result, Err(WsError::InvalidPayload { .. })));
    assert_eq!(result.map(|_| ()).unwrap_err().error_code(), "invalid_payload");
}

#[tokio::test]
async fn given_three_connections_when_broadcast_then_each_receives_verbatim_text() {
    let server = server();
    let mut receivers = Vec::new();
    for _ in 0..3 {
        let (tx, rx) = mpsc::channel(8);
        server.registry().register(tx).await.expect("register");
        receivers.push(rx);
    }

    let info = server.fan_out(VALID).await.expect("valid payload");

    assert_eq!(info.recipients, 3);
    assert_eq!(info.delivered, 3);
    assert_eq!(info.dropped, 0);
    for rx in &mut receivers {
        let frame = rx.try_recv().expect("frame queued");
        assert_eq!(text_of(frame), VALID);
    }
}

#[tokio::test]
async fn given_one_closed_connection_when_broadcast_then_others_still_receive() {
    let server = server();
    let (dead_tx, dead_rx) = mpsc::channel(8);
    server.registry().register(dead_tx).await.expect("register");
    drop(dead_rx);

    let mut live = Vec::new();
    for _ in 0..4 {
        let (tx, rx) = mpsc::channel(8);
        server.registry().register(tx).await.expect("register");
        live.push(rx);
    }

    let info = server.fan_out(VALID).await.expect("valid payload");

    assert_eq!(info.recipients, 5);
    assert_eq!(info.delivered, 4);
    assert_eq!(info.dropped, 1);
    for rx in &mut live {
        assert!(rx.try_recv().is_ok());
    }
}

#[tokio::test]
async fn given_full_connection_when_broadcast_then_dropped_without_blocking() {
    let server = server();
    let (slow_tx, mut slow_rx) = mpsc::channel(1);
    server.registry().register(slow_tx).await.expect("register");
    let (fast_tx, mut fast_rx) = mpsc::channel(8);
    server.registry().register(fast_tx).await.expect("register");

    let first = server.fan_out(VALID).await.expect("valid payload");
    let second = server.fan_out(VALID).await.expect("valid payload");

    assert_eq!(first.dropped, 0);
    assert_eq!(second.delivered, 1);
    assert_eq!(second.dropped, 1);
    assert!(server.broadcast(VALID).await, "send failures do not fail the broadcast");

    assert!(slow_rx.try_recv().is_ok());
    assert!(slow_rx.try_recv().is_err());
    for _ in 0..3 {
        assert!(fast_rx.try_recv().is_ok());
    }
}

#[tokio::test]
async fn given_server_when_stop_called_twice_then_stays_stopped() {
    let server = server();

    server.stop();
    server.stop();

    assert!(server.is_stopped());
}

#[tokio::test]
async fn given_custom_config_when_bind_addr_requested_then_host_and_port_joined() {
    let server = BroadcastServer::new(BroadcastServerConfig {
        host: "127.0.0.1".to_string(),
        port: 9100,
        limits: ConnectionLimits { max_total: 3 },
        ..Default::default()
    });

    assert_eq!(server.bind_addr(), "127.0.0.1:9100");
    assert_eq!(server.registry().limits().max_total, 3);
}
