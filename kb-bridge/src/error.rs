use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Config error: {0}")]
    Config(#[from] kb_config::ConfigError),

    #[error("WebSocket server error: {0}")]
    Ws(#[from] kb_ws::WsError),

    #[error("Kafka error: {0}")]
    Kafka(#[from] kb_kafka::KafkaError),

    #[error("Failed to prepare log output {path}: {source}")]
    LogFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Background task failed: {message}")]
    Task { message: String },
}

pub type Result<T> = std::result::Result<T, BridgeError>;
