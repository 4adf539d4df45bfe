mod config;
mod consumer_config;
mod consumer_mode;
mod error;
mod kafka_config;
mod log_level;
mod logging_config;
mod offset_reset;
mod producer_config;
mod server_config;
mod websocket_config;

pub use config::Config;
pub use consumer_config::ConsumerConfig;
pub use consumer_mode::ConsumerMode;
pub use error::{ConfigError, ConfigErrorResult};
pub use kafka_config::KafkaConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use offset_reset::OffsetReset;
pub use producer_config::ProducerConfig;
pub use server_config::ServerConfig;
pub use websocket_config::WebSocketConfig;

#[cfg(test)]
mod tests;

const CONFIG_DIR_ENV: &str = "KB_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".kb";
const CONFIG_FILENAME: &str = "config.toml";

// Server
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 9002;
const MIN_PORT: u16 = 1024;
const DEFAULT_MAX_CONNECTIONS: usize = 10000;
const MIN_MAX_CONNECTIONS: usize = 1;
const MAX_MAX_CONNECTIONS: usize = 100000;

// Kafka
const DEFAULT_BROKERS: &str = "localhost:9092";
const DEFAULT_TOPIC: &str = "test_topic";
const DEFAULT_GROUP_ID: &str = "my-consumer-group";
const DEFAULT_CLIENT_ID: &str = "kb-bridge";
const DEFAULT_STARTUP_TIMEOUT_MS: u64 = 5000;

// Consumer
const DEFAULT_POLL_TIMEOUT_MS: u64 = 5000;
const MIN_POLL_TIMEOUT_MS: u64 = 1;
const MAX_POLL_TIMEOUT_MS: u64 = 300_000;
const DEFAULT_EOF_BACKOFF_MS: u64 = 500;
const DEFAULT_ERROR_BACKOFF_MS: u64 = 1000;
const MAX_BACKOFF_MS: u64 = 60_000;

// Producer
const DEFAULT_FLUSH_TIMEOUT_MS: u64 = 10_000;

// Logging
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
