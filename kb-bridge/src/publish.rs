use crate::Result as BridgeErrorResult;

use kb_codec::StructuredMessage;
use kb_config::Config;
use kb_kafka::{DeliveryReport, KafkaSettings, LogProducer};

use log::info;

/// Publish one message and wait for it to be flushed
pub async fn publish(config: &Config, message: &StructuredMessage) -> BridgeErrorResult<DeliveryReport> {
    let producer = LogProducer::connect(
        &KafkaSettings::from(&config.kafka),
        config.producer.flush_timeout(),
    )?;

    info!(
        "Publishing id='{}' content='{}' timestamp={}",
        message.id, message.content, message.timestamp
    );
    let report = producer.send(message).await?;
    producer.flush()?;

    Ok(report)
}
