use crate::{
    ConfigError, ConfigErrorResult, ConsumerMode, DEFAULT_ERROR_BACKOFF_MS, DEFAULT_EOF_BACKOFF_MS,
    DEFAULT_POLL_TIMEOUT_MS, MAX_BACKOFF_MS, MAX_POLL_TIMEOUT_MS, MIN_POLL_TIMEOUT_MS,
};

use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConsumerConfig {
    pub mode: ConsumerMode,
    /// Bounded wait for a single poll
    pub poll_timeout_ms: u64,
    /// Pause after reaching end of partition (continuous mode)
    pub eof_backoff_ms: u64,
    /// Pause after a broker-reported error (continuous mode)
    pub error_backoff_ms: u64,
}

impl Default for ConsumerConfig {
    fn default() -> Self {
        Self {
            mode: ConsumerMode::default(),
            poll_timeout_ms: DEFAULT_POLL_TIMEOUT_MS,
            eof_backoff_ms: DEFAULT_EOF_BACKOFF_MS,
            error_backoff_ms: DEFAULT_ERROR_BACKOFF_MS,
        }
    }
}

impl ConsumerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.poll_timeout_ms < MIN_POLL_TIMEOUT_MS || self.poll_timeout_ms > MAX_POLL_TIMEOUT_MS
        {
            return Err(ConfigError::config(format!(
                "consumer.poll_timeout_ms must be {}-{}, got {}",
                MIN_POLL_TIMEOUT_MS, MAX_POLL_TIMEOUT_MS, self.poll_timeout_ms
            )));
        }

        if self.eof_backoff_ms > MAX_BACKOFF_MS {
            return Err(ConfigError::config(format!(
                "consumer.eof_backoff_ms must be <= {}, got {}",
                MAX_BACKOFF_MS, self.eof_backoff_ms
            )));
        }

        if self.error_backoff_ms > MAX_BACKOFF_MS {
            return Err(ConfigError::config(format!(
                "consumer.error_backoff_ms must be <= {}, got {}",
                MAX_BACKOFF_MS, self.error_backoff_ms
            )));
        }

        Ok(())
    }

    pub fn poll_timeout(&self) -> Duration {
        Duration::from_millis(self.poll_timeout_ms)
    }

    pub fn eof_backoff(&self) -> Duration {
        Duration::from_millis(self.eof_backoff_ms)
    }

    pub fn error_backoff(&self) -> Duration {
        Duration::from_millis(self.error_backoff_ms)
    }
}
