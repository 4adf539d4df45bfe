use std::time::Duration;

use async_trait::async_trait;

/// A record taken off the log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsumedRecord {
    pub partition: i32,
    pub offset: i64,
    /// Empty when the record had no value
    pub payload: Vec<u8>,
}

/// What a single poll produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollEvent {
    Record(ConsumedRecord),
    TimedOut,
    EndOfPartition { partition: i32 },
    Error(String),
}

/// Where the consumer pulls records from
#[async_trait]
pub trait RecordSource: Send {
    /// Wait up to `timeout` for the next event. Must be cancel-safe.
    async fn poll(&mut self, timeout: Duration) -> PollEvent;

    /// Leave the group and release the connection. Idempotent.
    fn close(&mut self);
}
