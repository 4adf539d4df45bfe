use crate::{
    ConsumedRecord, ConsumerSettings, ConsumerState, ConsumerStats, Forwarder, KafkaMetrics,
    PollEvent, PollOutcome, RecordSource, Result as KafkaErrorResult,
};

use kb_codec::StructuredMessage;
use kb_ws::{ShutdownGuard, ValidatedPayload};

use log::{debug, error, info, warn};

/// Pulls records off the log, decodes them and hands them to a forwarder.
///
/// Records are processed strictly one at a time, so per-partition order is
/// preserved end to end.
pub struct LogConsumer<S, F> {
    source: S,
    forwarder: F,
    settings: ConsumerSettings,
    state: ConsumerState,
    metrics: KafkaMetrics,
}

impl<S, F> LogConsumer<S, F>
where
    S: RecordSource,
    F: Forwarder,
{
    /// Wrap a connected, subscribed source
    pub fn new(source: S, forwarder: F, settings: ConsumerSettings) -> Self {
        Self {
            source,
            forwarder,
            settings,
            state: ConsumerState::Subscribed,
            metrics: KafkaMetrics::new(),
        }
    }

    pub fn state(&self) -> ConsumerState {
        self.state
    }

    pub fn settings(&self) -> &ConsumerSettings {
        &self.settings
    }

    /// Run one poll cycle
    pub async fn poll_once(&mut self) -> PollOutcome {
        if self.state == ConsumerState::Closed {
            return PollOutcome::Closed;
        }

        self.transition(ConsumerState::Polling);
        debug!(
            "Waiting up to {}ms for a record",
            self.settings.poll_timeout.as_millis()
        );

        let outcome = match self.source.poll(self.settings.poll_timeout).await {
            PollEvent::Record(record) => {
                self.transition(ConsumerState::Delivered);
                Self::deliver(&self.forwarder, record).await
            }
            PollEvent::TimedOut => {
                self.transition(ConsumerState::TimedOut);
                info!("Timed out waiting for a record");
                PollOutcome::TimedOut
            }
            PollEvent::EndOfPartition { partition } => {
                self.transition(ConsumerState::EndOfPartition);
                info!("Reached end of partition {partition}");
                PollOutcome::EndOfPartition
            }
            PollEvent::Error(message) => {
                self.transition(ConsumerState::ConsumerError);
                error!("Consumer error: {message}");
                PollOutcome::ConsumerError(message)
            }
        };

        self.metrics.poll_completed(&outcome);
        outcome
    }

    /// Single-shot mode: poll once, close, and report whether a record arrived
    pub async fn consume_one(mut self) -> bool {
        let outcome = self.poll_once().await;
        self.close();

        if outcome.message_received() {
            info!("Record consumed ({})", outcome.label());
        } else {
            info!("No record consumed ({})", outcome.label());
        }

        outcome.message_received()
    }

    /// Continuous mode: poll until shutdown is signalled.
    ///
    /// Re-polls immediately after a timeout, and backs off after end of
    /// partition or a consumer error.
    pub async fn run(&mut self, mut shutdown: ShutdownGuard) -> ConsumerStats {
        let mut stats = ConsumerStats::default();

        while !shutdown.poll_shutdown() {
            let outcome = tokio::select! {
                _ = shutdown.wait() => break,
                outcome = self.poll_once() => outcome,
            };
            stats.record(&outcome);

            let backoff = match outcome {
                PollOutcome::EndOfPartition => self.settings.eof_backoff,
                PollOutcome::ConsumerError(_) => self.settings.error_backoff,
                PollOutcome::Closed => break,
                _ => continue,
            };

            tokio::select! {
                _ = shutdown.wait() => break,
                _ = tokio::time::sleep(backoff) => {}
            }
        }

        self.close();
        info!(
            "Consumer stopped after {} poll(s): {} forwarded, {} rejected, {} undecodable",
            stats.polls, stats.forwarded, stats.rejected, stats.decode_failed
        );

        stats
    }

    /// Release the source. Safe to call from any state, any number of times.
    pub fn close(&mut self) {
        if self.state != ConsumerState::Closed {
            self.source.close();
            self.transition(ConsumerState::Closed);
        }
    }

    async fn deliver(forwarder: &F, record: ConsumedRecord) -> PollOutcome {
        let message = match Self::decode_record(&record) {
            Ok(message) => message,
            Err(e) => {
                warn!(
                    "Dropping record at partition {} offset {}: {e}",
                    record.partition, record.offset
                );
                return PollOutcome::DecodeFailed;
            }
        };

        info!(
            "Received record id='{}' content='{}' timestamp={}",
            message.id, message.content, message.timestamp
        );

        let payload = match Self::to_payload(message) {
            Ok(payload) => payload,
            Err(e) => {
                error!("Failed to serialize record: {e}");
                return PollOutcome::Rejected;
            }
        };

        if forwarder.forward(&payload).await {
            info!("Record forwarded to subscribers");
            PollOutcome::Forwarded
        } else {
            warn!("Record refused by forwarder");
            PollOutcome::Rejected
        }
    }

    fn decode_record(record: &ConsumedRecord) -> KafkaErrorResult<StructuredMessage> {
        Ok(kb_codec::decode(&record.payload)?)
    }

    fn to_payload(message: StructuredMessage) -> KafkaErrorResult<String> {
        Ok(ValidatedPayload::from(message).to_json()?)
    }

    fn transition(&mut self, next: ConsumerState) {
        debug!("Consumer state {} -> {next}", self.state);
        self.state = next;
    }
}
