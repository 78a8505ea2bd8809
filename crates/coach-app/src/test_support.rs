//! Fake chat client and helpers shared by the controller and REPL tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use coach_ai::{
    AiClient, AiError, AiResponse, AsyncDispatcher, ConversationSession, TokenUsage, Turn,
};
use coach_common::{EventBus, RenderEvent};
use coach_exercises::{ExerciseCatalog, ExerciseRecord};
use tokio::sync::{broadcast, Notify};

use crate::controller::Tutor;

/// Replies "echo: <last user turn>". Can fail every call, or hold each call
/// until its gate is notified.
#[derive(Default)]
pub(crate) struct EchoClient {
    pub calls: AtomicUsize,
    pub fail: bool,
    pub gate: Option<Arc<Notify>>,
}

impl EchoClient {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn gated() -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        let client = Self {
            gate: Some(Arc::clone(&gate)),
            ..Default::default()
        };
        (client, gate)
    }
}

#[async_trait]
impl AiClient for EchoClient {
    async fn send_message(&self, _system: &str, turns: &[Turn]) -> Result<AiResponse, AiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        if self.fail {
            return Err(AiError::NetworkError("connection refused".into()));
        }
        let last = turns.last().map(|t| t.text.clone()).unwrap_or_default();
        Ok(AiResponse {
            content: format!("echo: {last}"),
            usage: TokenUsage::default(),
        })
    }
}

pub(crate) fn catalog() -> ExerciseCatalog {
    let mut exercises = HashMap::new();
    let records = vec![ExerciseRecord::new("Pointers", "D", "E", "H")];
    exercises.insert("beginner".to_string(), records);
    ExerciseCatalog::new(vec!["beginner".into()], exercises)
}

/// A configured tutor on the current runtime, plus a subscriber.
pub(crate) fn tutor_with(client: Arc<EchoClient>) -> (Tutor, broadcast::Receiver<RenderEvent>) {
    let events = EventBus::new(64);
    let rx = events.subscribe();
    let dispatcher = AsyncDispatcher::new(
        ConversationSession::new("rules"),
        client,
        tokio::runtime::Handle::current(),
    );
    (Tutor::new(catalog(), Ok(dispatcher), events), rx)
}

pub(crate) async fn recv(rx: &mut broadcast::Receiver<RenderEvent>) -> RenderEvent {
    tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("no event")
        .expect("bus closed")
}

pub(crate) async fn settle(tutor: &Tutor) {
    tokio::time::timeout(Duration::from_secs(5), async {
        while tutor.is_busy() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("tutor stayed busy");
}
