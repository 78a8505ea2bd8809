//! ConversationSession struct and history management.

use coach_common::SessionId;

use crate::token_tracker::TokenTracker;
use crate::Turn;

use super::types::SystemContext;

/// A conversation: ordered turn history plus the fixed system context.
///
/// Not reentrant. `submit` takes `&mut self`, and callers that share a
/// session across threads go through `AsyncDispatcher`.
pub struct ConversationSession {
    pub(super) id: SessionId,
    /// Chronological, append-only until `clear_history`.
    pub(super) history: Vec<Turn>,
    pub(super) system_context: SystemContext,
    pub(super) tracker: TokenTracker,
}

impl ConversationSession {
    pub fn new(system_context: impl Into<SystemContext>) -> Self {
        Self {
            id: SessionId::new(),
            history: Vec::new(),
            system_context: system_context.into(),
            tracker: TokenTracker::new(),
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn system_context(&self) -> &SystemContext {
        &self.system_context
    }

    /// Get the full conversation history.
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Drop every turn. The system context and token counters are kept.
    pub fn clear_history(&mut self) {
        tracing::debug!(session = %self.id, dropped = self.history.len(), "history cleared");
        self.history.clear();
    }

    pub fn turn_count(&self) -> usize {
        self.history.len()
    }

    pub fn tracker(&self) -> &TokenTracker {
        &self.tracker
    }
}
