use kb_codec::CodecError;
use kb_ws::WsError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KafkaError {
    #[error("Kafka client error: {source} {location}")]
    Client {
        #[source]
        source: rdkafka::error::KafkaError,
        location: ErrorLocation,
    },

    #[error("Kafka configuration error: {message} {location}")]
    Config {
        message: String,
        location: ErrorLocation,
    },

    #[error("Delivery to '{topic}' failed: {source} {location}")]
    Delivery {
        topic: String,
        #[source]
        source: rdkafka::error::KafkaError,
        location: ErrorLocation,
    },

    #[error("Record decode failed: {source} {location}")]
    Codec {
        #[source]
        source: CodecError,
        location: ErrorLocation,
    },

    #[error("Payload envelope failed: {source} {location}")]
    Envelope {
        #[source]
        source: WsError,
        location: ErrorLocation,
    },
}

impl KafkaError {
    #[track_caller]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<rdkafka::error::KafkaError> for KafkaError {
    #[track_caller]
    fn from(source: rdkafka::error::KafkaError) -> Self {
        Self::Client {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CodecError> for KafkaError {
    #[track_caller]
    fn from(source: CodecError) -> Self {
        Self::Codec {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<WsError> for KafkaError {
    #[track_caller]
    fn from(source: WsError) -> Self {
        Self::Envelope {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, KafkaError>;
