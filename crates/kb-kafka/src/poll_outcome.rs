/// Result of one poll cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// Record decoded and accepted by the forwarder
    Forwarded,
    /// Record decoded but the forwarder refused it
    Rejected,
    /// Record arrived but could not be decoded
    DecodeFailed,
    TimedOut,
    EndOfPartition,
    ConsumerError(String),
    /// Consumer already closed; nothing was polled
    Closed,
}

impl PollOutcome {
    /// A record was taken off the log, whatever happened to it afterwards
    pub fn message_received(&self) -> bool {
        matches!(self, Self::Forwarded | Self::Rejected | Self::DecodeFailed)
    }

    /// Metric label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Forwarded => "forwarded",
            Self::Rejected => "rejected",
            Self::DecodeFailed => "decode_failed",
            Self::TimedOut => "timed_out",
            Self::EndOfPartition => "end_of_partition",
            Self::ConsumerError(_) => "consumer_error",
            Self::Closed => "closed",
        }
    }
}
