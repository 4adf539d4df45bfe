use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, ConsumerConfig,
    DEFAULT_CONFIG_DIR, KafkaConfig, LoggingConfig, ProducerConfig, ServerConfig, WebSocketConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub websocket: WebSocketConfig,
    pub kafka: KafkaConfig,
    pub consumer: ConsumerConfig,
    pub producer: ProducerConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for KB_CONFIG_DIR env var, else use ./.kb/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply KB_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: KB_CONFIG_DIR env var > ./.kb/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.websocket.validate()?;
        self.kafka.validate()?;
        self.consumer.validate()?;
        self.producer.validate()?;

        Ok(())
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (max {} connections)",
            self.server.host, self.server.port, self.server.max_connections
        );
        info!("  websocket: buffer={}", self.websocket.send_buffer_size);
        info!(
            "  kafka: brokers={}, topic={}, group={}, offset_reset={}",
            self.kafka.brokers, self.kafka.topic, self.kafka.group_id, self.kafka.offset_reset
        );
        info!(
            "  consumer: mode={}, poll={}ms, eof_backoff={}ms, error_backoff={}ms",
            self.consumer.mode,
            self.consumer.poll_timeout_ms,
            self.consumer.eof_backoff_ms,
            self.consumer.error_backoff_ms
        );
        info!("  producer: flush={}ms", self.producer.flush_timeout_ms);
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("KB_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("KB_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse(
            "KB_SERVER_MAX_CONNECTIONS",
            &mut self.server.max_connections,
        );

        // WebSocket
        Self::apply_env_parse(
            "KB_WS_SEND_BUFFER_SIZE",
            &mut self.websocket.send_buffer_size,
        );

        // Kafka
        Self::apply_env_string("KB_KAFKA_BROKERS", &mut self.kafka.brokers);
        Self::apply_env_string("KB_KAFKA_TOPIC", &mut self.kafka.topic);
        Self::apply_env_string("KB_KAFKA_GROUP_ID", &mut self.kafka.group_id);
        Self::apply_env_parse("KB_KAFKA_OFFSET_RESET", &mut self.kafka.offset_reset);
        Self::apply_env_string("KB_KAFKA_CLIENT_ID", &mut self.kafka.client_id);
        Self::apply_env_parse(
            "KB_KAFKA_STARTUP_TIMEOUT_MS",
            &mut self.kafka.startup_timeout_ms,
        );

        // Consumer
        Self::apply_env_parse("KB_CONSUMER_MODE", &mut self.consumer.mode);
        Self::apply_env_parse(
            "KB_CONSUMER_POLL_TIMEOUT_MS",
            &mut self.consumer.poll_timeout_ms,
        );
        Self::apply_env_parse(
            "KB_CONSUMER_EOF_BACKOFF_MS",
            &mut self.consumer.eof_backoff_ms,
        );
        Self::apply_env_parse(
            "KB_CONSUMER_ERROR_BACKOFF_MS",
            &mut self.consumer.error_backoff_ms,
        );

        // Producer
        Self::apply_env_parse(
            "KB_PRODUCER_FLUSH_TIMEOUT_MS",
            &mut self.producer.flush_timeout_ms,
        );

        // Logging
        Self::apply_env_parse("KB_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("KB_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("KB_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
