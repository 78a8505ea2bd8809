//! Fake `AiClient` implementations for tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::thread::ThreadId;

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::{AiClient, AiError, AiResponse, TokenUsage, Turn};

#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub system: String,
    pub turns: Vec<Turn>,
    pub thread: ThreadId,
}

/// Replies from a fixed script, recording every request it receives.
#[derive(Default)]
pub(crate) struct ScriptedClient {
    script: Mutex<VecDeque<Result<AiResponse, AiError>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, text: &str) -> Self {
        self.reply_with_usage(text, 0, 0)
    }

    pub fn reply_with_usage(self, text: &str, input: u64, output: u64) -> Self {
        self.script.lock().unwrap().push_back(Ok(AiResponse {
            content: text.to_string(),
            usage: TokenUsage {
                input_tokens: input,
                output_tokens: output,
            },
        }));
        self
    }

    pub fn fail(self, err: AiError) -> Self {
        self.script.lock().unwrap().push_back(Err(err));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl AiClient for ScriptedClient {
    async fn send_message(&self, system: &str, turns: &[Turn]) -> Result<AiResponse, AiError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            system: system.to_string(),
            turns: turns.to_vec(),
            thread: std::thread::current().id(),
        });
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AiError::ApiError("script exhausted".into())))
    }
}

/// Holds each request until the returned `Notify` is signalled.
pub(crate) struct GatedClient {
    gate: Arc<Notify>,
    reply: String,
}

impl GatedClient {
    pub fn new(reply: &str) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        (
            Self {
                gate: Arc::clone(&gate),
                reply: reply.to_string(),
            },
            gate,
        )
    }
}

#[async_trait]
impl AiClient for GatedClient {
    async fn send_message(&self, _system: &str, _turns: &[Turn]) -> Result<AiResponse, AiError> {
        self.gate.notified().await;
        Ok(AiResponse {
            content: self.reply.clone(),
            usage: TokenUsage::default(),
        })
    }
}

/// Panics inside the transport call.
pub(crate) struct PanickingClient;

#[async_trait]
impl AiClient for PanickingClient {
    async fn send_message(&self, _system: &str, _turns: &[Turn]) -> Result<AiResponse, AiError> {
        panic!("transport exploded");
    }
}
