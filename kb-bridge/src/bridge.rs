use crate::{BridgeError, Result as BridgeErrorResult};

use kb_config::{Config, ConsumerMode};
use kb_kafka::{ConsumerSettings, KafkaRecordSource, KafkaSettings, LogConsumer};
use kb_ws::{
    BroadcastServer, BroadcastServerConfig, ConnectionConfig, ConnectionLimits, WsError,
};

use std::panic::Location;

use error_location::ErrorLocation;
use log::{error, info, warn};
use tokio::net::TcpListener;

/// Build the broadcast server described by `config`
pub fn broadcast_server(config: &Config) -> BroadcastServer {
    BroadcastServer::new(BroadcastServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        limits: ConnectionLimits {
            max_total: config.server.max_connections,
        },
        connection: ConnectionConfig {
            send_buffer_size: config.websocket.send_buffer_size,
            ..Default::default()
        },
    })
}

/// Run the bridge until the configured mode completes.
///
/// Returns `Ok(true)` when the process should exit successfully: a record
/// was consumed in single-shot mode, or continuous mode shut down cleanly.
/// Startup failures (bind, broker, subscription) are returned as errors
/// before any polling happens.
pub async fn run(config: Config) -> BridgeErrorResult<bool> {
    info!("Starting kb-bridge v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let server = broadcast_server(&config);

    // Bind before connecting to the broker so subscribers can attach early
    let bind_addr = server.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|source| WsError::Bind {
            addr: bind_addr.clone(),
            source,
            location: ErrorLocation::from(Location::caller()),
        })?;

    let serving = server.clone();
    let server_task = tokio::spawn(async move { serving.serve(listener).await });

    let shutdown_on_signal = server.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Interrupt received, shutting down");
                shutdown_on_signal.stop();
            }
            Err(e) => warn!("Failed to install interrupt handler: {e}"),
        }
    });

    let outcome = consume(&config, &server).await;

    server.stop();
    match server_task.await {
        Ok(Ok(())) => info!("WebSocket server stopped"),
        Ok(Err(e)) => error!("WebSocket server failed: {e}"),
        Err(e) => error!("WebSocket server task panicked: {e}"),
    }

    outcome
}

async fn consume(config: &Config, server: &BroadcastServer) -> BridgeErrorResult<bool> {
    let kafka_settings = KafkaSettings::from(&config.kafka);

    // The metadata probe blocks on the network
    let source = tokio::task::spawn_blocking(move || KafkaRecordSource::connect(&kafka_settings))
        .await
        .map_err(|e| BridgeError::Task {
            message: format!("consumer startup: {e}"),
        })??;

    let mut consumer = LogConsumer::new(
        source,
        server.clone(),
        ConsumerSettings::from(&config.consumer),
    );

    let mut shutdown = server.shutdown_coordinator().subscribe_guard();

    match config.consumer.mode {
        ConsumerMode::SingleShot => {
            let received = tokio::select! {
                received = consumer.consume_one() => received,
                _ = shutdown.wait() => false,
            };

            if received {
                info!("Successfully consumed one message. Exiting.");
            } else {
                info!("No message received within timeout. Exiting.");
            }
            Ok(received)
        }
        ConsumerMode::Continuous => {
            let stats = consumer.run(shutdown).await;
            info!(
                "Consumed {} message(s) over {} poll(s)",
                stats.messages_received(),
                stats.polls
            );
            Ok(true)
        }
    }
}
