use std::time::Duration;

/// Configuration for WebSocket connections
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Send buffer size (bounded; broadcasts to a full buffer are dropped)
    pub send_buffer_size: usize,
    /// How long a closing session waits for its writer before aborting it
    pub close_timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            send_buffer_size: 100,
            close_timeout: Duration::from_secs(2),
        }
    }
}
