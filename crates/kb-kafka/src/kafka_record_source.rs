use crate::{
    ConsumedRecord, ConsumerState, KafkaSettings, PollEvent, RecordSource,
    Result as KafkaErrorResult,
};

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use rdkafka::config::ClientConfig;
use rdkafka::consumer::{Consumer, StreamConsumer};
use rdkafka::error::KafkaError as RdKafkaError;
use rdkafka::message::Message;

/// Group consumer subscribed to a single topic
pub struct KafkaRecordSource {
    consumer: Option<StreamConsumer>,
    topic: String,
}

impl KafkaRecordSource {
    /// Create the consumer, probe the brokers and subscribe.
    ///
    /// The metadata probe blocks for up to `startup_timeout`; call this from
    /// a blocking context.
    pub fn connect(settings: &KafkaSettings) -> KafkaErrorResult<Self> {
        debug!("Consumer state {}", ConsumerState::Initializing);
        let consumer: StreamConsumer = ClientConfig::new()
            .set("bootstrap.servers", &settings.brokers)
            .set("group.id", &settings.group_id)
            .set("client.id", &settings.client_id)
            .set("auto.offset.reset", &settings.offset_reset)
            .set("enable.partition.eof", "true")
            .set("enable.auto.commit", "true")
            .create()?;

        let metadata =
            consumer.fetch_metadata(Some(settings.topic.as_str()), settings.startup_timeout)?;
        match metadata.topics().iter().find(|t| t.name() == settings.topic) {
            Some(topic) if topic.error().is_none() => {
                debug!(
                    "Topic '{}' has {} partition(s) across {} broker(s)",
                    settings.topic,
                    topic.partitions().len(),
                    metadata.brokers().len()
                );
            }
            _ => warn!(
                "Topic '{}' not found in broker metadata, it may be auto-created",
                settings.topic
            ),
        }

        consumer.subscribe(&[settings.topic.as_str()])?;
        info!(
            "Consumer '{}' subscribed to topic '{}' (group '{}', offset reset '{}')",
            settings.client_id, settings.topic, settings.group_id, settings.offset_reset
        );
        debug!(
            "Consumer state {} -> {}",
            ConsumerState::Initializing,
            ConsumerState::Subscribed
        );

        Ok(Self {
            consumer: Some(consumer),
            topic: settings.topic.clone(),
        })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }
}

#[async_trait]
impl RecordSource for KafkaRecordSource {
    async fn poll(&mut self, timeout: Duration) -> PollEvent {
        let Some(consumer) = self.consumer.as_ref() else {
            return PollEvent::Error("consumer is closed".to_string());
        };

        match tokio::time::timeout(timeout, consumer.recv()).await {
            Err(_) => PollEvent::TimedOut,
            Ok(Ok(message)) => PollEvent::Record(ConsumedRecord {
                partition: message.partition(),
                offset: message.offset(),
                payload: message.payload().map(<[u8]>::to_vec).unwrap_or_default(),
            }),
            Ok(Err(RdKafkaError::PartitionEOF(partition))) => {
                PollEvent::EndOfPartition { partition }
            }
            Ok(Err(e)) => PollEvent::Error(e.to_string()),
        }
    }

    fn close(&mut self) {
        if let Some(consumer) = self.consumer.take() {
            consumer.unsubscribe();
            info!("Consumer for topic '{}' closed", self.topic);
        }
    }
}

impl Drop for KafkaRecordSource {
    fn drop(&mut self) {
        self.close();
    }
}
