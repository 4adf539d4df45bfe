#![allow(dead_code)]

use kb_codec::StructuredMessage;
use kb_kafka::{ConsumedRecord, PollEvent, RecordSource};

use std::collections::VecDeque;
use std::time::Duration;

use async_trait::async_trait;

/// Plays back a fixed list of events, then times out like an idle topic
pub struct ScriptedSource {
    events: VecDeque<PollEvent>,
}

impl ScriptedSource {
    pub fn new(events: impl IntoIterator<Item = PollEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }
}

#[async_trait]
impl RecordSource for ScriptedSource {
    async fn poll(&mut self, timeout: Duration) -> PollEvent {
        match self.events.pop_front() {
            Some(event) => event,
            None => {
                tokio::time::sleep(timeout).await;
                PollEvent::TimedOut
            }
        }
    }

    fn close(&mut self) {}
}

pub fn record_of(message: &StructuredMessage) -> PollEvent {
    PollEvent::Record(ConsumedRecord {
        partition: 0,
        offset: 0,
        payload: kb_codec::encode(message),
    })
}
