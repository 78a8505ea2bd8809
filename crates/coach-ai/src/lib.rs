//! Conversation engine for coach.
//!
//! Provides:
//! - the `AiClient` seam and a Claude Messages API implementation
//! - `ConversationSession`, which owns the turn history and system context
//! - `AsyncDispatcher`, which runs one request at a time off the caller's
//!   thread and reports back through callbacks
//! - token usage tracking

pub mod claude;
pub mod dispatcher;
pub mod session;
pub mod token_tracker;

#[cfg(test)]
pub(crate) mod test_support;

use async_trait::async_trait;

pub use claude::{ClaudeClient, ClaudeConfig};
pub use dispatcher::{AsyncDispatcher, DispatchError, DispatchRequest, DispatchState};
pub use session::{ConversationSession, SessionError, SystemContext};
pub use token_tracker::TokenTracker;

/// A language-model endpoint.
///
/// Implementations receive the fixed system context and the whole
/// chronological history, and return the assistant's reply.
#[async_trait]
pub trait AiClient: Send + Sync {
    async fn send_message(&self, system: &str, turns: &[Turn]) -> Result<AiResponse, AiError>;
}

/// One message in the conversation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AiResponse {
    pub content: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

/// Transport and protocol failures. The `Display` text is shown to the user.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("authentication failed: {0}")]
    Unauthorized(String),
    #[error("rate limited by the API, try again shortly")]
    RateLimited,
    #[error("network error: {0}")]
    NetworkError(String),
    #[error("malformed response: {0}")]
    ParseError(String),
    #[error("request timed out")]
    Timeout,
}
