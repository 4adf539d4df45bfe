use crate::{DeliveryReport, KafkaError, KafkaMetrics, KafkaSettings, Result as KafkaErrorResult};

use kb_codec::StructuredMessage;

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use log::{debug, info};
use rdkafka::config::ClientConfig;
use rdkafka::producer::{FutureProducer, FutureRecord, Producer};
use rdkafka::util::Timeout;

/// Publishes encoded records to a single topic
pub struct LogProducer {
    producer: FutureProducer,
    topic: String,
    delivery_timeout: Duration,
    flush_timeout: Duration,
    metrics: KafkaMetrics,
}

impl LogProducer {
    pub fn connect(settings: &KafkaSettings, flush_timeout: Duration) -> KafkaErrorResult<Self> {
        if settings.topic.is_empty() {
            return Err(KafkaError::config("producer topic cannot be empty"));
        }

        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", &settings.brokers)
            .set("client.id", &settings.client_id)
            .set(
                "message.timeout.ms",
                settings.startup_timeout.as_millis().to_string(),
            )
            .create()?;

        info!(
            "Producer '{}' connected to {} for topic '{}'",
            settings.client_id, settings.brokers, settings.topic
        );

        Ok(Self {
            producer,
            topic: settings.topic.clone(),
            delivery_timeout: settings.startup_timeout,
            flush_timeout,
            metrics: KafkaMetrics::new(),
        })
    }

    /// Encode and publish one message, waiting for the broker's acknowledgement
    pub async fn send(&self, message: &StructuredMessage) -> KafkaErrorResult<DeliveryReport> {
        let payload = kb_codec::encode(message);
        debug!(
            "Publishing message id='{}' ({} bytes) to '{}'",
            message.id,
            payload.len(),
            self.topic
        );

        let record = FutureRecord::<(), Vec<u8>>::to(&self.topic).payload(&payload);

        let (partition, offset) = self
            .producer
            .send(record, Timeout::After(self.delivery_timeout))
            .await
            .map_err(|(source, _)| {
                self.metrics.produce_failed();
                KafkaError::Delivery {
                    topic: self.topic.clone(),
                    source,
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;

        self.metrics.message_produced();
        let report = DeliveryReport {
            topic: self.topic.clone(),
            partition,
            offset,
        };
        info!("Message delivered to {report}");

        Ok(report)
    }

    /// Block until outstanding deliveries complete or `flush_timeout` elapses
    pub fn flush(&self) -> KafkaErrorResult<()> {
        self.producer.flush(Timeout::After(self.flush_timeout))?;
        Ok(())
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }
}
