//! Claude API client struct, request building, and response parsing.

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::StatusCode;

use crate::{AiError, AiResponse, TokenUsage, Turn};

use super::config::ClaudeConfig;

pub(crate) const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Longest slice of an error body carried into an error message.
const ERROR_BODY_LIMIT: usize = 200;

/// Claude API client.
pub struct ClaudeClient {
    pub(crate) config: ClaudeConfig,
    pub(crate) http: reqwest::Client,
}

impl ClaudeClient {
    pub fn new(config: ClaudeConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .default_headers(auth_headers(&config.api_key)?)
            .build()
            .map_err(|e| AiError::NetworkError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Build the JSON request body for the Messages API.
    pub(crate) fn build_request_body(&self, system: &str, turns: &[Turn]) -> serde_json::Value {
        let msgs: Vec<_> = turns
            .iter()
            .map(|turn| {
                serde_json::json!({
                    "role": turn.role.as_str(),
                    "content": turn.text,
                })
            })
            .collect();

        let mut body = serde_json::json!({
            "model": self.config.model,
            "max_tokens": self.config.max_tokens,
            "temperature": self.config.temperature,
            "messages": msgs,
        });

        if !system.trim().is_empty() {
            body["system"] = serde_json::json!(system);
        }

        body
    }

    /// Parse a non-streaming response. Only the first text block is used.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<AiResponse, AiError> {
        let blocks = json["content"]
            .as_array()
            .ok_or_else(|| AiError::ParseError("response has no content array".into()))?;

        let content = blocks
            .iter()
            .find_map(|b| {
                if b["type"] == "text" {
                    b["text"].as_str().map(String::from)
                } else {
                    None
                }
            })
            .ok_or_else(|| AiError::ParseError("response contained no text block".into()))?;

        let usage = TokenUsage {
            input_tokens: json["usage"]["input_tokens"].as_u64().unwrap_or(0),
            output_tokens: json["usage"]["output_tokens"].as_u64().unwrap_or(0),
        };

        Ok(AiResponse { content, usage })
    }
}

/// Static headers sent with every request.
pub(crate) fn auth_headers(api_key: &str) -> Result<HeaderMap, AiError> {
    let mut key = HeaderValue::from_str(api_key)
        .map_err(|_| AiError::Unauthorized("API key contains invalid characters".into()))?;
    key.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert("x-api-key", key);
    headers.insert("anthropic-version", HeaderValue::from_static(ANTHROPIC_VERSION));
    Ok(headers)
}

/// Map a non-success HTTP status (and its body) to an error.
pub(crate) fn classify_status(status: StatusCode, body: &str) -> AiError {
    let detail = error_detail(body);
    match status {
        StatusCode::TOO_MANY_REQUESTS => AiError::RateLimited,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AiError::Unauthorized(detail),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => AiError::Timeout,
        _ => AiError::ApiError(format!("HTTP {status}: {detail}")),
    }
}

/// Prefer the API's `error.message`; fall back to a truncated raw body.
fn error_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| json["error"]["message"].as_str().map(String::from))
        .unwrap_or_else(|| body.chars().take(ERROR_BODY_LIMIT).collect())
}

/// Map a reqwest transport error.
pub(crate) fn classify_transport(err: &reqwest::Error) -> AiError {
    if err.is_timeout() {
        AiError::Timeout
    } else if err.is_decode() {
        AiError::ParseError(err.to_string())
    } else {
        AiError::NetworkError(err.to_string())
    }
}
