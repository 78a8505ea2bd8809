//! Language-model endpoint settings.

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "https://api.anthropic.com/v1/messages";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub model: String,
    /// Upper bound on reply length (valid range: 1-64000).
    pub max_tokens: u32,
    /// Sampling temperature (valid range: 0.0-1.0).
    pub temperature: f64,
    pub api_url: String,
    /// Whole-request timeout in seconds (valid range: 5-600).
    pub request_timeout_secs: u32,
    /// Connection timeout in seconds (valid range: 1-60).
    pub connect_timeout_secs: u32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model: "claude-sonnet-4-20250514".to_string(),
            max_tokens: 4096,
            temperature: 0.7,
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: 120,
            connect_timeout_secs: 10,
        }
    }
}
