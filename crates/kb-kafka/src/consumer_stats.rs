use crate::PollOutcome;

/// Per-outcome counts for a continuous run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsumerStats {
    pub polls: u64,
    pub forwarded: u64,
    pub rejected: u64,
    pub decode_failed: u64,
    pub timed_out: u64,
    pub end_of_partition: u64,
    pub errors: u64,
}

impl ConsumerStats {
    pub fn record(&mut self, outcome: &PollOutcome) {
        if *outcome == PollOutcome::Closed {
            return;
        }

        self.polls += 1;
        match outcome {
            PollOutcome::Forwarded => self.forwarded += 1,
            PollOutcome::Rejected => self.rejected += 1,
            PollOutcome::DecodeFailed => self.decode_failed += 1,
            PollOutcome::TimedOut => self.timed_out += 1,
            PollOutcome::EndOfPartition => self.end_of_partition += 1,
            PollOutcome::ConsumerError(_) => self.errors += 1,
            PollOutcome::Closed => {}
        }
    }

    pub fn messages_received(&self) -> u64 {
        self.forwarded + self.rejected + self.decode_failed
    }
}
