use kb_config::KafkaConfig;

use std::time::Duration;

/// Connection parameters shared by the consumer and the producer
#[derive(Debug, Clone)]
pub struct KafkaSettings {
    pub brokers: String,
    pub topic: String,
    pub group_id: String,
    /// `earliest` or `latest`
    pub offset_reset: String,
    pub client_id: String,
    /// Bound on the metadata probe at startup and on producer delivery
    pub startup_timeout: Duration,
}

impl From<&KafkaConfig> for KafkaSettings {
    fn from(config: &KafkaConfig) -> Self {
        Self {
            brokers: config.brokers.clone(),
            topic: config.topic.clone(),
            group_id: config.group_id.clone(),
            offset_reset: config.offset_reset.as_str().to_string(),
            client_id: config.client_id.clone(),
            startup_timeout: config.startup_timeout(),
        }
    }
}

impl Default for KafkaSettings {
    fn default() -> Self {
        Self::from(&KafkaConfig::default())
    }
}
