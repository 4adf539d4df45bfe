use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Record decode failed: {source} {location}")]
    Decode {
        #[source]
        source: DecodeFault,
        location: ErrorLocation,
    },
}

/// Why a payload is not a well-formed record
#[derive(Error, Debug)]
pub enum DecodeFault {
    #[error(transparent)]
    Wire(#[from] prost::DecodeError),

    #[error("field {tag} is missing")]
    MissingField { tag: u32 },

    #[error("field {tag} appears more than once")]
    DuplicateField { tag: u32 },

    #[error("field {tag} is not part of the record schema")]
    UnknownField { tag: u32 },
}

impl From<DecodeFault> for CodecError {
    #[track_caller]
    fn from(source: DecodeFault) -> Self {
        Self::Decode {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<prost::DecodeError> for CodecError {
    #[track_caller]
    fn from(source: prost::DecodeError) -> Self {
        Self::Decode {
            source: DecodeFault::Wire(source),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;
