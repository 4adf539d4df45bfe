use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_BROKERS, DEFAULT_CLIENT_ID, DEFAULT_GROUP_ID,
    DEFAULT_STARTUP_TIMEOUT_MS, DEFAULT_TOPIC, OffsetReset,
};

use std::time::Duration;

use serde::Deserialize;

/// Broker connection settings shared by consumer and producer
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KafkaConfig {
    /// Comma-separated `host:port` list
    pub brokers: String,
    pub topic: String,
    pub group_id: String,
    pub offset_reset: OffsetReset,
    pub client_id: String,
    /// Bound on the broker metadata probe performed at startup
    pub startup_timeout_ms: u64,
}

impl Default for KafkaConfig {
    fn default() -> Self {
        Self {
            brokers: String::from(DEFAULT_BROKERS),
            topic: String::from(DEFAULT_TOPIC),
            group_id: String::from(DEFAULT_GROUP_ID),
            offset_reset: OffsetReset::default(),
            client_id: String::from(DEFAULT_CLIENT_ID),
            startup_timeout_ms: DEFAULT_STARTUP_TIMEOUT_MS,
        }
    }
}

impl KafkaConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.brokers.split(',').all(|b| b.trim().is_empty()) {
            return Err(ConfigError::kafka("kafka.brokers cannot be empty"));
        }

        if self.topic.trim().is_empty() {
            return Err(ConfigError::kafka("kafka.topic cannot be empty"));
        }

        if self.group_id.trim().is_empty() {
            return Err(ConfigError::kafka("kafka.group_id cannot be empty"));
        }

        if self.startup_timeout_ms == 0 {
            return Err(ConfigError::kafka("kafka.startup_timeout_ms must be > 0"));
        }

        Ok(())
    }

    pub fn startup_timeout(&self) -> Duration {
        Duration::from_millis(self.startup_timeout_ms)
    }
}
