use crate::{PayloadError, ValidatedPayload};

use std::panic::Location;

use error_location::ErrorLocation;
use serde_json::{Number, Value};

pub const ID_FIELD: &str = "id";
pub const CONTENT_FIELD: &str = "content";
pub const TIMESTAMP_FIELD: &str = "timestamp";

const REQUIRED_FIELDS: [&str; 3] = [ID_FIELD, CONTENT_FIELD, TIMESTAMP_FIELD];

/// Validates payloads before they are relayed, whether they came from the
/// log or from a client.
pub struct PayloadValidator;

impl PayloadValidator {
    /// Parse and validate a raw payload
    #[track_caller]
    pub fn validate(raw: &str) -> Result<ValidatedPayload, PayloadError> {
        let value: Value =
            serde_json::from_str(raw).map_err(|e| PayloadError::MalformedPayload {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Self::validate_value(&value)
    }

    /// Validate an already-parsed payload.
    ///
    /// Presence of every field is checked before any type check, so a payload
    /// missing `timestamp` with a numeric `id` reports `MissingField`.
    #[track_caller]
    pub fn validate_value(value: &Value) -> Result<ValidatedPayload, PayloadError> {
        let object = value.as_object();

        for field in REQUIRED_FIELDS {
            if !object.is_some_and(|o| o.contains_key(field)) {
                return Err(PayloadError::MissingField {
                    field,
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        let id = Self::string_field(value, ID_FIELD)?;
        let content = Self::string_field(value, CONTENT_FIELD)?;
        let timestamp = value[TIMESTAMP_FIELD]
            .as_number()
            .map(Self::timestamp_as_i64)
            .ok_or_else(|| PayloadError::TypeMismatch {
                field: TIMESTAMP_FIELD,
                expected: "number",
                location: ErrorLocation::from(Location::caller()),
            })?;

        if id.is_empty() {
            return Err(PayloadError::EmptyId {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if timestamp <= 0 {
            return Err(PayloadError::InvalidTimestamp {
                value: timestamp,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(ValidatedPayload {
            id: id.to_string(),
            content: content.to_string(),
            timestamp,
        })
    }

    #[track_caller]
    fn string_field<'a>(value: &'a Value, field: &'static str) -> Result<&'a str, PayloadError> {
        value[field]
            .as_str()
            .ok_or_else(|| PayloadError::TypeMismatch {
                field,
                expected: "string",
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Integers above i64::MAX saturate; fractional values truncate toward zero.
    fn timestamp_as_i64(number: &Number) -> i64 {
        if let Some(value) = number.as_i64() {
            value
        } else if number.as_u64().is_some() {
            i64::MAX
        } else {
            number.as_f64().map(|f| f as i64).unwrap_or(0)
        }
    }
}
