use crate::PayloadError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WsError {
    #[error("Connection closed: {reason} {location}")]
    ConnectionClosed {
        reason: String,
        location: ErrorLocation,
    },

    #[error("Connection limit exceeded: {current} connections (max: {max}) {location}")]
    ConnectionLimitExceeded {
        current: usize,
        max: usize,
        location: ErrorLocation,
    },

    #[error("Invalid payload: {source} {location}")]
    InvalidPayload {
        #[source]
        source: PayloadError,
        location: ErrorLocation,
    },

    #[error("Failed to bind {addr}: {source} {location}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Server error: {source} {location}")]
    Serve {
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("JSON serialization failed: {source} {location}")]
    Json {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl WsError {
    /// Short label used for metrics and logs
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ConnectionClosed { .. } => "connection_closed",
            Self::ConnectionLimitExceeded { .. } => "connection_limit",
            Self::InvalidPayload { .. } => "invalid_payload",
            Self::Bind { .. } => "bind_failed",
            Self::Serve { .. } => "serve_failed",
            Self::Json { .. } => "json_error",
        }
    }
}

impl From<PayloadError> for WsError {
    #[track_caller]
    fn from(source: PayloadError) -> Self {
        Self::InvalidPayload {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for WsError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, WsError>;
