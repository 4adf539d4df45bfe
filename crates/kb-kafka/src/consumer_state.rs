use std::fmt;

/// Lifecycle of a [`LogConsumer`](crate::LogConsumer).
///
/// `Initializing` covers broker connection and subscription, which happen in
/// [`KafkaRecordSource::connect`](crate::KafkaRecordSource::connect) before a
/// consumer exists; `connect` logs it and the move to `Subscribed`. A
/// [`LogConsumer`](crate::LogConsumer) is never observed in `Initializing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsumerState {
    Initializing,
    Subscribed,
    Polling,
    Delivered,
    TimedOut,
    EndOfPartition,
    ConsumerError,
    Closed,
}

impl ConsumerState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Initializing => "initializing",
            Self::Subscribed => "subscribed",
            Self::Polling => "polling",
            Self::Delivered => "delivered",
            Self::TimedOut => "timed_out",
            Self::EndOfPartition => "end_of_partition",
            Self::ConsumerError => "consumer_error",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for ConsumerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
