use crate::{BridgeCli, ProducerCli};

use kb_config::{Config, ConsumerMode};

use clap::Parser;

#[test]
fn given_no_flags_when_applied_then_config_unchanged() {
    let cli = BridgeCli::try_parse_from(["kb-bridge"]).expect("parses");
    let mut config = Config::default();

    cli.apply(&mut config);

    assert_eq!(config.consumer.mode, ConsumerMode::SingleShot);
    assert_eq!(config.server.port, 9002);
    assert_eq!(config.kafka.topic, "test_topic");
}

#[test]
fn given_continuous_flag_when_applied_then_mode_continuous() {
    let cli = BridgeCli::try_parse_from(["kb-bridge", "--continuous"]).expect("parses");
    let mut config = Config::default();

    cli.apply(&mut config);

    assert_eq!(config.consumer.mode, ConsumerMode::Continuous);
}

#[test]
fn given_once_and_continuous_when_parsed_then_rejected() {
    let result = BridgeCli::try_parse_from(["kb-bridge", "--once", "--continuous"]);

    assert!(result.is_err());
}

#[test]
fn given_overrides_when_applied_then_flags_win() {
    let cli = BridgeCli::try_parse_from([
        "kb-bridge",
        "--poll-timeout-ms",
        "250",
        "--port",
        "9100",
        "--brokers",
        "broker-a:9092,broker-b:9092",
        "--topic",
        "events",
        "--group-id",
        "bridge-group",
    ])
    .expect("parses");
    let mut config = Config::default();

    cli.apply(&mut config);

    assert_eq!(config.consumer.poll_timeout_ms, 250);
    assert_eq!(config.server.port, 9100);
    assert_eq!(config.kafka.brokers, "broker-a:9092,broker-b:9092");
    assert_eq!(config.kafka.topic, "events");
    assert_eq!(config.kafka.group_id, "bridge-group");
}

#[test]
fn given_no_producer_flags_when_message_built_then_canonical_with_current_time() {
    let cli = ProducerCli::try_parse_from(["kb-producer"]).expect("parses");
    let before = chrono::Utc::now().timestamp();

    let message = cli.message();

    assert_eq!(message.id, "123");
    assert_eq!(message.content, "Hello, Kafka!");
    assert!(message.timestamp >= before);
}

#[test]
fn given_producer_flags_when_message_built_then_fields_taken_from_flags() {
    let cli = ProducerCli::try_parse_from([
        "kb-producer",
        "--id",
        "abc",
        "--content",
        "payload",
        "--timestamp",
        "42",
        "--topic",
        "other_topic",
    ])
    .expect("parses");
    let mut config = Config::default();

    cli.apply(&mut config);
    let message = cli.message();

    assert_eq!(message.id, "abc");
    assert_eq!(message.content, "payload");
    assert_eq!(message.timestamp, 42);
    assert_eq!(config.kafka.topic, "other_topic");
}
