pub mod consumer_settings;
pub mod consumer_state;
pub mod consumer_stats;
pub mod delivery_report;
pub mod error;
pub mod forwarder;
pub mod kafka_record_source;
pub mod kafka_settings;
pub mod log_consumer;
pub mod log_producer;
pub mod metrics;
pub mod poll_outcome;
pub mod record_source;

pub use consumer_settings::ConsumerSettings;
pub use consumer_state::ConsumerState;
pub use consumer_stats::ConsumerStats;
pub use delivery_report::DeliveryReport;
pub use error::{KafkaError, Result};
pub use forwarder::Forwarder;
pub use kafka_record_source::KafkaRecordSource;
pub use kafka_settings::KafkaSettings;
pub use log_consumer::LogConsumer;
pub use log_producer::LogProducer;
pub use metrics::KafkaMetrics;
pub use poll_outcome::PollOutcome;
pub use record_source::{ConsumedRecord, PollEvent, RecordSource};

#[cfg(test)]
mod tests;
