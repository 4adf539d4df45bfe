use kb_config::ConsumerConfig;

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ConsumerSettings {
    pub poll_timeout: Duration,
    /// Pause after reaching the end of a partition (continuous mode)
    pub eof_backoff: Duration,
    /// Pause after a consumer error (continuous mode)
    pub error_backoff: Duration,
}

impl From<&ConsumerConfig> for ConsumerSettings {
    fn from(config: &ConsumerConfig) -> Self {
        Self {
            poll_timeout: config.poll_timeout(),
            eof_backoff: config.eof_backoff(),
            error_backoff: config.error_backoff(),
        }
    }
}

impl Default for ConsumerSettings {
    fn default() -> Self {
        Self::from(&ConsumerConfig::default())
    }
}
