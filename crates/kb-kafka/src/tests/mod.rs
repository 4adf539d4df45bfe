mod settings;

use crate::{ConsumedRecord, Forwarder, PollEvent, RecordSource};

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use kb_codec::StructuredMessage;

/// Plays back a fixed list of events, then behaves like an idle topic
pub(crate) struct ScriptedSource {
    events: VecDeque<PollEvent>,
    pub(crate) polls: Arc<AtomicUsize>,
    pub(crate) closes: Arc<AtomicUsize>,
}

impl ScriptedSource {
    pub(crate) fn new(events: impl IntoIterator<Item = PollEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            polls: Arc::new(AtomicUsize::new(0)),
            closes: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl RecordSource for ScriptedSource {
    async fn poll(&mut self, timeout: Duration) -> PollEvent {
        self.polls.fetch_add(1, Ordering::SeqCst);
        match self.events.pop_front() {
            Some(event) => event,
            None => {
                tokio::time::sleep(timeout).await;
                PollEvent::TimedOut
            }
        }
    }

    fn close(&mut self) {
        self.closes.fetch_add(1, Ordering::SeqCst);
    }
}

/// Captures every forwarded payload
#[derive(Clone)]
pub(crate) struct RecordingForwarder {
    pub(crate) payloads: Arc<Mutex<Vec<String>>>,
    accept: bool,
}

impl RecordingForwarder {
    pub(crate) fn accepting() -> Self {
        Self {
            payloads: Arc::new(Mutex::new(Vec::new())),
            accept: true,
        }
    }

    pub(crate) fn refusing() -> Self {
        Self {
            accept: false,
            ..Self::accepting()
        }
    }

    pub(crate) fn received(&self) -> Vec<String> {
        self.payloads.lock().expect("forwarder lock").clone()
    }
}

#[async_trait]
impl Forwarder for RecordingForwarder {
    async fn forward(&self, payload: &str) -> bool {
        self.payloads
            .lock()
            .expect("forwarder lock")
            .push(payload.to_string());
        self.accept
    }
}

pub(crate) fn record_of(message: &StructuredMessage) -> PollEvent {
    PollEvent::Record(ConsumedRecord {
        partition: 0,
        offset: 0,
        payload: kb_codec::encode(message),
    })
}

pub(crate) fn canonical_message() -> StructuredMessage {
    StructuredMessage::new("123", "Hello, Kafka!", 1_700_000_000)
}
