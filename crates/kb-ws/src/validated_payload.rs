use crate::Result as WsErrorResult;

use kb_codec::StructuredMessage;
use serde::{Deserialize, Serialize};

/// JSON envelope relayed to subscribers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedPayload {
    pub id: String,
    pub content: String,
    pub timestamp: i64,
}

impl ValidatedPayload {
    /// Serialize to the wire form sent to clients
    #[track_caller]
    pub fn to_json(&self) -> WsErrorResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<&StructuredMessage> for ValidatedPayload {
    fn from(message: &StructuredMessage) -> Self {
        Self {
            id: message.id.clone(),
            content: message.content.clone(),
            timestamp: message.timestamp,
        }
    }
}

impl From<StructuredMessage> for ValidatedPayload {
    fn from(message: StructuredMessage) -> Self {
        Self {
            id: message.id,
            content: message.content,
            timestamp: message.timestamp,
        }
    }
}
