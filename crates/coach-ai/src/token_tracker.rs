//! Token usage tracking for a session.

use crate::TokenUsage;

/// Cumulative token usage reported by the endpoint. Informational only.
#[derive(Debug, Default)]
pub struct TokenTracker {
    /// Total usage across all calls.
    total: TokenUsage,
    /// Number of successful API calls.
    call_count: u64,
}

impl TokenTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record token usage from an API call.
    pub fn record(&mut self, usage: &TokenUsage) {
        self.total.input_tokens = self.total.input_tokens.saturating_add(usage.input_tokens);
        self.total.output_tokens = self.total.output_tokens.saturating_add(usage.output_tokens);
        self.call_count += 1;
    }

    /// Total tokens (input + output).
    pub fn total_tokens(&self) -> u64 {
        self.total.total_tokens()
    }

    pub fn call_count(&self) -> u64 {
        self.call_count
    }
}
