use crate::PollOutcome;

use metrics::counter;

/// Metrics collector for log consumption and production
#[derive(Clone)]
pub struct KafkaMetrics {
    prefix: &'static str,
}

impl KafkaMetrics {
    pub fn new() -> Self {
        Self { prefix: "kb_kafka" }
    }

    /// Record the outcome of one poll cycle
    pub fn poll_completed(&self, outcome: &PollOutcome) {
        counter!(format!("{}.polls", self.prefix)).increment(1);
        counter!(format!("{}.polls.{}", self.prefix, outcome.label())).increment(1);
    }

    pub fn message_produced(&self) {
        counter!(format!("{}.produced", self.prefix)).increment(1);
    }

    pub fn produce_failed(&self) {
        counter!(format!("{}.produce_failed", self.prefix)).increment(1);
    }
}

impl Default for KafkaMetrics {
    fn default() -> Self {
        Self::new()
    }
}
