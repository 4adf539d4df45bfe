use crate::{ConsumerSettings, KafkaSettings, LogProducer};

use kb_config::{ConsumerConfig, KafkaConfig, OffsetReset};

use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};

#[test]
fn given_default_config_when_converted_then_matches_documented_defaults() {
    let settings = KafkaSettings::default();

    assert_eq!(settings.brokers, "localhost:9092");
    assert_eq!(settings.topic, "test_topic");
    assert_eq!(settings.group_id, "my-consumer-group");
    assert_eq!(settings.offset_reset, "earliest");
}

#[test]
fn given_latest_offset_reset_when_converted_then_passed_through() {
    let config = KafkaConfig {
        offset_reset: OffsetReset::Latest,
        ..Default::default()
    };

    let settings = KafkaSettings::from(&config);

    assert_eq!(settings.offset_reset, "latest");
}

#[test]
fn given_consumer_config_when_converted_then_durations_in_millis() {
    let config = ConsumerConfig {
        poll_timeout_ms: 250,
        eof_backoff_ms: 10,
        error_backoff_ms: 20,
        ..Default::default()
    };

    let settings = ConsumerSettings::from(&config);

    assert_eq!(settings.poll_timeout, Duration::from_millis(250));
    assert_eq!(settings.eof_backoff, Duration::from_millis(10));
    assert_eq!(settings.error_backoff, Duration::from_millis(20));
}

#[tokio::test]
async fn given_empty_topic_when_producer_connects_then_config_error() {
    let settings = KafkaSettings {
        topic: String::new(),
        ..Default::default()
    };

    let result = LogProducer::connect(&settings, Duration::from_secs(1)).map(|_| ());

    assert_that!(result, err(anything()));
}

#[tokio::test]
async fn given_unreachable_broker_when_producer_connects_then_client_created_lazily() {
    // librdkafka connects in the background; creation alone does not touch the network.
    let settings = KafkaSettings {
        brokers: "127.0.0.1:1".to_string(),
        ..Default::default()
    };

    let result = LogProducer::connect(&settings, Duration::from_millis(100)).map(|_| ());

    assert_that!(result, ok(anything()));
}
