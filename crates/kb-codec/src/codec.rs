use crate::structured_message::{CONTENT_TAG, ID_TAG, TIMESTAMP_TAG};
use crate::{DecodeFault, Result as CodecResult, StructuredMessage};

use bytes::Buf;
use prost::encoding::{DecodeContext, decode_key, int64, string};

/// Encode a message into its binary wire form.
///
/// All three fields are always written, in tag order, so a decoder can tell
/// a cut-off record from a complete one.
pub fn encode(message: &StructuredMessage) -> Vec<u8> {
    let mut buf = Vec::with_capacity(message.id.len() + message.content.len() + 16);
    string::encode(ID_TAG, &message.id, &mut buf);
    string::encode(CONTENT_TAG, &message.content, &mut buf);
    int64::encode(TIMESTAMP_TAG, &message.timestamp, &mut buf);
    buf
}

/// Decode a binary payload.
///
/// The payload must hold each schema field exactly once and nothing else.
/// Truncated input, unknown tags, repeated tags, wrong wire types and invalid
/// UTF-8 all fail. An empty `id` or a non-positive `timestamp` decodes fine
/// and is rejected later by payload validation.
#[track_caller]
pub fn decode(payload: &[u8]) -> CodecResult<StructuredMessage> {
    let mut buf = payload;
    let mut message = StructuredMessage::default();
    let mut seen = [false; 3];

    while buf.has_remaining() {
        let (tag, wire_type) = decode_key(&mut buf)?;
        let slot = match tag {
            ID_TAG | CONTENT_TAG | TIMESTAMP_TAG => (tag - ID_TAG) as usize,
            _ => return Err(DecodeFault::UnknownField { tag }.into()),
        };
        if seen[slot] {
            return Err(DecodeFault::DuplicateField { tag }.into());
        }
        seen[slot] = true;

        let ctx = DecodeContext::default();
        match tag {
            ID_TAG => string::merge(wire_type, &mut message.id, &mut buf, ctx)?,
            CONTENT_TAG => string::merge(wire_type, &mut message.content, &mut buf, ctx)?,
            _ => int64::merge(wire_type, &mut message.timestamp, &mut buf, ctx)?,
        }
    }

    if let Some(slot) = seen.iter().position(|present| !present) {
        return Err(DecodeFault::MissingField {
            tag: ID_TAG + slot as u32,
        }
        .into());
    }

    Ok(message)
}
