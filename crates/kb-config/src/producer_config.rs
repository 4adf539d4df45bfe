use crate::{ConfigError, ConfigErrorResult, DEFAULT_FLUSH_TIMEOUT_MS};

use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProducerConfig {
    /// Bound on draining queued records before exit
    pub flush_timeout_ms: u64,
}

impl Default for ProducerConfig {
    fn default() -> Self {
        Self {
            flush_timeout_ms: DEFAULT_FLUSH_TIMEOUT_MS,
        }
    }
}

impl ProducerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.flush_timeout_ms == 0 {
            return Err(ConfigError::kafka("producer.flush_timeout_ms must be > 0"));
        }
        Ok(())
    }

    pub fn flush_timeout(&self) -> Duration {
        Duration::from_millis(self.flush_timeout_ms)
    }
}
