pub mod codec;
pub mod error;
pub mod structured_message;

pub use codec::{decode, encode};
pub use error::{CodecError, DecodeFault, Result};
pub use structured_message::{CONTENT_TAG, ID_TAG, StructuredMessage, TIMESTAMP_TAG};
