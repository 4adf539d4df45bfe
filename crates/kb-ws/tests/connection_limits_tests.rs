mod common;

use common::{
    test_client::WsTestClient,
    test_server::{TestServerConfig, create_test_server_with_config},
};

#[tokio::test]
async fn given_server_at_total_limit_when_new_connection_then_rejected_503() {
    // Given - Server with total limit of 2 connections
    let test_server = create_test_server_with_config(TestServerConfig::with_strict_limits());
    let _client1 = WsTestClient::connect(&test_server.server).await;
    let _client2 = WsTestClient::connect(&test_server.server).await;
    test_server.wait_for_connections(2).await;

    // When - Try to create 3rd connection
    let response = test_server.server.get_websocket("/ws").await;

    // Then - Rejected with 503
    response.assert_status_service_unavailable();
}

#[tokio::test]
async fn given_server_at_limit_when_client_leaves_then_new_connection_accepted() {
    let test_server = create_test_server_with_config(TestServerConfig::with_strict_limits());
    let client1 = WsTestClient::connect(&test_server.server).await;
    let _client2 = WsTestClient::connect(&test_server.server).await;
    test_server.wait_for_connections(2).await;

    client1.close().await;
    test_server.wait_for_connections(1).await;

    let _client3 = WsTestClient::connect(&test_server.server).await;
    test_server.wait_for_connections(2).await;
}
