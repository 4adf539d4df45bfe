use kb_config::{Config, ConsumerMode};

use clap::{Args, Parser};

/// Connection overrides shared by both binaries. Flags win over config and env.
#[derive(Args, Debug, Default)]
pub struct KafkaArgs {
    /// Comma-separated broker list
    #[arg(long)]
    pub brokers: Option<String>,

    /// Topic to consume from or publish to
    #[arg(long)]
    pub topic: Option<String>,
}

impl KafkaArgs {
    fn apply(&self, config: &mut Config) {
        if let Some(ref brokers) = self.brokers {
            config.kafka.brokers = brokers.clone();
        }
        if let Some(ref topic) = self.topic {
            config.kafka.topic = topic.clone();
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "kb-bridge")]
#[command(about = "Relay records from a Kafka topic to WebSocket subscribers")]
#[command(version)]
pub struct BridgeCli {
    /// Consume a single record, then exit (0 if one arrived, 1 otherwise)
    #[arg(long, conflicts_with = "continuous")]
    pub once: bool,

    /// Keep consuming until interrupted
    #[arg(long)]
    pub continuous: bool,

    /// How long a single poll waits for a record
    #[arg(long)]
    pub poll_timeout_ms: Option<u64>,

    /// Consumer group id
    #[arg(long)]
    pub group_id: Option<String>,

    /// WebSocket listen port
    #[arg(long)]
    pub port: Option<u16>,

    #[command(flatten)]
    pub kafka: KafkaArgs,
}

impl BridgeCli {
    pub fn apply(&self, config: &mut Config) {
        if self.once {
            config.consumer.mode = ConsumerMode::SingleShot;
        } else if self.continuous {
            config.consumer.mode = ConsumerMode::Continuous;
        }
        if let Some(poll_timeout_ms) = self.poll_timeout_ms {
            config.consumer.poll_timeout_ms = poll_timeout_ms;
        }
        if let Some(ref group_id) = self.group_id {
            config.kafka.group_id = group_id.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        self.kafka.apply(config);
    }
}

#[derive(Parser, Debug)]
#[command(name = "kb-producer")]
#[command(about = "Publish one encoded message to a Kafka topic")]
#[command(version)]
pub struct ProducerCli {
    #[arg(long, default_value = "123")]
    pub id: String,

    #[arg(long, default_value = "Hello, Kafka!")]
    pub content: String,

    /// Seconds since the Unix epoch (defaults to now)
    #[arg(long)]
    pub timestamp: Option<i64>,

    #[command(flatten)]
    pub kafka: KafkaArgs,
}

impl ProducerCli {
    pub fn apply(&self, config: &mut Config) {
        self.kafka.apply(config);
    }

    pub fn message(&self) -> kb_codec::StructuredMessage {
        kb_codec::StructuredMessage::new(
            self.id.clone(),
            self.content.clone(),
            self.timestamp
                .unwrap_or_else(|| chrono::Utc::now().timestamp()),
        )
    }
}
