#![allow(dead_code)]

use kb_ws::{BroadcastServer, BroadcastServerConfig, ConnectionConfig, ConnectionLimits};

use axum_test::TestServer;
use tokio::time::{Duration, Instant, sleep};

pub const CANONICAL_PAYLOAD: &str =
    r#"{"id":"123","content":"Hello, Kafka!","timestamp":1700000000}"#;

/// Configuration for test server instances
#[derive(Debug, Clone)]
pub struct TestServerConfig {
    pub max_connections_total: usize,
    pub send_buffer_size: usize,
    pub close_timeout: Duration,
}

impl Default for TestServerConfig {
    fn default() -> Self {
        Self {
            max_connections_total: 100,
            send_buffer_size: 100,
            close_timeout: Duration::from_secs(2),
        }
    }
}

impl TestServerConfig {
    /// Tiny send buffer and a short writer grace period (for stalled clients)
    pub fn with_small_buffer() -> Self {
        Self {
            send_buffer_size: 2,
            close_timeout: Duration::from_millis(100),
            ..Default::default()
        }
    }

    /// Create config with strict connection limits (for limit tests)
    pub fn with_strict_limits() -> Self {
        Self {
            max_connections_total: 2,
            ..Default::default()
        }
    }
}

/// Test server with access to the broadcast server behind it
pub struct TestServerWithState {
    pub server: TestServer,
    pub broadcast: BroadcastServer,
}

impl TestServerWithState {
    /// Sessions register after the upgrade completes; wait until the count settles.
    pub async fn wait_for_connections(&self, expected: usize) {
        let deadline = Instant::now() + Duration::from_secs(2);
        loop {
            let count = self.broadcast.registry().total_count().await;
            if count == expected {
                return;
            }
            assert!(
                Instant::now() < deadline,
                "expected {expected} connections, registry has {count}"
            );
            sleep(Duration::from_millis(10)).await;
        }
    }
}

/// Create a TestServer with default configuration
pub fn create_test_server() -> TestServerWithState {
    create_test_server_with_config(TestServerConfig::default())
}

/// Create a TestServer with custom configuration
pub fn create_test_server_with_config(config: TestServerConfig) -> TestServerWithState {
    let broadcast = BroadcastServer::new(BroadcastServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        limits: ConnectionLimits {
            max_total: config.max_connections_total,
        },
        connection: ConnectionConfig {
            send_buffer_size: config.send_buffer_size,
            close_timeout: config.close_timeout,
        },
    });

    let server = TestServer::builder()
        .http_transport()
        .build(broadcast.router())
        .expect("Failed to create test server");

    TestServerWithState { server, broadcast }
}
