//! AiClient trait implementation for ClaudeClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{AiClient, AiError, AiResponse, Turn};

use super::client::{classify_status, classify_transport, ClaudeClient};

#[async_trait]
impl AiClient for ClaudeClient {
    async fn send_message(&self, system: &str, turns: &[Turn]) -> Result<AiResponse, AiError> {
        let body = self.build_request_body(system, turns);

        debug!(model = %self.config.model, turns = turns.len(), "Claude API request");

        let response = self
            .http
            .post(&self.config.api_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| classify_transport(&e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(classify_status(status, &text));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiError::ParseError(e.to_string()))?;

        let parsed = self.parse_response(json)?;
        debug!(
            input_tokens = parsed.usage.input_tokens,
            output_tokens = parsed.usage.output_tokens,
            "Claude API response"
        );
        Ok(parsed)
    }
}
