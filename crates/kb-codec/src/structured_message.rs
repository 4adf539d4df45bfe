use serde::{Deserialize, Serialize};

/// Wire tag of `id`
pub const ID_TAG: u32 = 1;
/// Wire tag of `content`
pub const CONTENT_TAG: u32 = 2;
/// Wire tag of `timestamp`
pub const TIMESTAMP_TAG: u32 = 3;

/// The record carried on the log topic.
///
/// Producer and consumer share this definition and the tags above, so their
/// encodings always agree. Every field is written on the wire, even when it
/// holds its default value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredMessage {
    pub id: String,
    pub content: String,
    /// Seconds since the Unix epoch
    pub timestamp: i64,
}

impl StructuredMessage {
    pub fn new(id: impl Into<String>, content: impl Into<String>, timestamp: i64) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            timestamp,
        }
    }
}
