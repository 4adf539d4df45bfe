use error_location::ErrorLocation;
use thiserror::Error;

/// Why a payload failed validation. Checks run in declaration order.
#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("Malformed payload: {message} {location}")]
    MalformedPayload {
        message: String,
        location: ErrorLocation,
    },

    #[error("Missing required field '{field}' {location}")]
    MissingField {
        field: &'static str,
        location: ErrorLocation,
    },

    #[error("Field '{field}' must be a {expected} {location}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
        location: ErrorLocation,
    },

    #[error("Field 'id' cannot be empty {location}")]
    EmptyId { location: ErrorLocation },

    #[error("Field 'timestamp' must be > 0, got {value} {location}")]
    InvalidTimestamp { value: i64, location: ErrorLocation },
}

impl PayloadError {
    /// Metric label
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedPayload { .. } => "malformed",
            Self::MissingField { .. } => "missing_field",
            Self::TypeMismatch { .. } => "type_mismatch",
            Self::EmptyId { .. } => "empty_id",
            Self::InvalidTimestamp { .. } => "invalid_timestamp",
        }
    }
}
