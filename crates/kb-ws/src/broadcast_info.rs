/// Outcome of one fan-out pass over the registry snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BroadcastInfo {
    /// Connections present in the snapshot
    pub recipients: usize,
    /// Frames queued successfully
    pub delivered: usize,
    /// Frames dropped because the connection was full or already closed
    pub dropped: usize,
}
