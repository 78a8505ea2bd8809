//! The request/response round trip for ConversationSession.

use tracing::{debug, warn};

use crate::{AiClient, Turn};

use super::manager::ConversationSession;
use super::types::SessionError;

impl ConversationSession {
    /// Add a user turn and get the assistant's reply.
    ///
    /// The user turn is appended before the call and stays in history if the
    /// call fails, so a later submit still carries it as context. The
    /// assistant turn is appended only on success.
    pub async fn submit(
        &mut self,
        client: &dyn AiClient,
        user_text: &str,
    ) -> Result<String, SessionError> {
        let text = user_text.trim();
        if text.is_empty() {
            return Err(SessionError::EmptyInput);
        }

        self.history.push(Turn::user(text));
        debug!(session = %self.id, turns = self.history.len(), "submitting user turn");

        let response = match client
            .send_message(self.system_context.as_str(), &self.history)
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(session = %self.id, error = %e, "request failed, user turn left unanswered");
                return Err(e.into());
            }
        };

        self.tracker.record(&response.usage);
        self.history.push(Turn::assistant(response.content.clone()));
        debug!(
            session = %self.id,
            turns = self.history.len(),
            total_tokens = self.tracker.total_tokens(),
            "assistant turn appended"
        );

        Ok(response.content)
    }
}
