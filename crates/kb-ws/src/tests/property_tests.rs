use crate::{PayloadError, PayloadValidator};

use proptest::prelude::*;
use serde_json::json;

proptest! {
    #[test]
    fn given_arbitrary_text_when_validated_then_never_panics(raw in ".*") {
        let _ = PayloadValidator::validate(&raw);
    }

    #[test]
    fn given_well_formed_payload_when_validated_then_accepted(
        id in "[a-zA-Z0-9_-]{1,32}",
        content in ".{0,64}",
        timestamp in 1i64..=i64::MAX,
    ) {
        let raw = json!({ "id": id, "content": content, "timestamp": timestamp }).to_string();

        let payload = PayloadValidator::validate(&raw);

        prop_assert!(payload.is_ok());
        let payload = payload.unwrap();
        prop_assert_eq!(payload.id, id);
        prop_assert_eq!(payload.content, content);
        prop_assert_eq!(payload.timestamp, timestamp);
    }

    #[test]
    fn given_non_positive_timestamp_when_validated_then_invalid_timestamp(
        id in "[a-z]{1,8}",
        timestamp in i64::MIN..=0i64,
    ) {
        let raw = json!({ "id": id, "content": "c", "timestamp": timestamp }).to_string();

        let result = PayloadValidator::validate(&raw);

        prop_assert!(
            matches!(result, Err(PayloadError::InvalidTimestamp { value, .. }) if value == timestamp),
            "expected InvalidTimestamp with value {}, got {:?}", timestamp, result
        );
    }

    #[test]
    fn given_one_field_removed_when_validated_then_that_field_reported(
        missing in prop_oneof![Just("id"), Just("content"), Just("timestamp")],
    ) {
        let mut value = json!({ "id": "1", "content": "c", "timestamp": 1 });
        if let Some(object) = value.as_object_mut() {
            object.remove(missing);
        }

        let result = PayloadValidator::validate_value(&value);

        prop_assert!(
            matches!(result, Err(PayloadError::MissingField { field, .. }) if field == missing),
            "expected MissingField {}, got {:?}", missing, result
        );
    }
}
