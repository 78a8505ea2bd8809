//! Anthropic Claude API client.
//!
//! Implements the `AiClient` trait for Claude models via the
//! Anthropic Messages API (https://api.anthropic.com/v1/messages),
//! authenticating with an `x-api-key` header.

mod api;
mod client;
mod config;

pub use client::ClaudeClient;
pub use config::{ClaudeConfig, ANTHROPIC_API_URL};
