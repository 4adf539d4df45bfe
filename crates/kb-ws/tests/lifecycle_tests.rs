mod common;

use common::{
    test_client::WsTestClient,
    test_server::{TestServerConfig, create_test_server, create_test_server_with_config},
};

use kb_ws::{BroadcastServer, BroadcastServerConfig};

use serde_json::Value;
use tokio::net::TcpListener;
use tokio::time::{Duration, timeout};

#[tokio::test]
async fn given_connected_clients_when_stopped_then_registry_drains() {
    let test_server = create_test_server();
    let _client1 = WsTestClient::connect(&test_server.server).await;
    let _client2 = WsTestClient::connect(&test_server.server).await;
    test_server.wait_for_connections(2).await;

    test_server.broadcast.stop();

    test_server.wait_for_connections(0).await;
}

#[tokio::test]
async fn given_client_that_never_reads_when_stopped_then_registry_still_drains() {
    let test_server = create_test_server_with_config(TestServerConfig::with_small_buffer());
    let _stalled = WsTestClient::connect(&test_server.server).await;
    test_server.wait_for_connections(1).await;

    // Enough data to fill the socket buffers and then the outbound channel
    let content = "x".repeat(512 * 1024);
    let payload = format!(r#"{{"id":"big","content":"{content}","timestamp":1700000000}}"#);
    for _ in 0..64 {
        assert!(test_server.broadcast.broadcast(&payload).await);
    }

    test_server.broadcast.stop();

    test_server.wait_for_connections(0).await;
}

#[tokio::test]
async fn given_stopped_server_when_upgrade_requested_then_rejected_503() {
    let test_server = create_test_server();
    test_server.broadcast.stop();

    let response = test_server.server.get_websocket("/ws").await;

    response.assert_status_service_unavailable();
}

#[tokio::test]
async fn given_running_server_when_health_requested_then_reports_connections() {
    let test_server = create_test_server();
    let _client = WsTestClient::connect(&test_server.server).await;
    test_server.wait_for_connections(1).await;

    let response = test_server.server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["connections"], 1);
}

#[tokio::test]
async fn given_serving_listener_when_stopped_then_serve_returns_ok() {
    let server = BroadcastServer::new(BroadcastServerConfig::default());
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");

    let serving = server.clone();
    let handle = tokio::spawn(async move { serving.serve(listener).await });

    tokio::time::sleep(Duration::from_millis(20)).await;
    server.stop();

    let result = timeout(Duration::from_secs(2), handle)
        .await
        .expect("serve returns after stop")
        .expect("serve task does not panic");
    assert!(result.is_ok());
}

#[tokio::test]
async fn given_stop_before_start_when_started_then_returns_immediately() {
    let server = BroadcastServer::new(BroadcastServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        ..Default::default()
    });

    server.stop();
    let result = timeout(Duration::from_secs(2), server.start())
        .await
        .expect("start honours an earlier stop");

    assert!(result.is_ok());
}
