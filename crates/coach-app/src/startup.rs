//! Builds the tutor's collaborators from the loaded config.

use std::sync::Arc;
use std::time::Duration;

use coach_ai::{AsyncDispatcher, ClaudeClient, ClaudeConfig, ConversationSession};
use coach_common::CoachError;
use coach_config::schema::ModelConfig;
use coach_config::{load_rules_or_placeholder, resolve_api_key, CoachConfig};
use coach_exercises::ExerciseCatalog;
use tokio::runtime::{Handle, Runtime};

/// Runtime that hosts dispatched requests.
pub fn build_runtime() -> std::io::Result<Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("coach-worker")
        .enable_all()
        .build()
}

pub fn load_catalog(config: &CoachConfig) -> ExerciseCatalog {
    ExerciseCatalog::load_or_empty(&config.data.exercises_path, config.data.tiers.clone())
}

pub fn claude_config(api_key: String, model: &ModelConfig) -> ClaudeConfig {
    ClaudeConfig::new(api_key)
        .with_model(model.model.clone())
        .with_max_tokens(model.max_tokens)
        .with_temperature(model.temperature)
        .with_api_url(model.api_url.clone())
        .with_timeouts(
            Duration::from_secs(u64::from(model.request_timeout_secs)),
            Duration::from_secs(u64::from(model.connect_timeout_secs)),
        )
}

/// Resolve the credential, read the rules and wire a dispatcher.
///
/// A missing credential is returned as an error; the caller keeps running
/// without chat.
pub fn build_dispatcher(
    config: &CoachConfig,
    runtime: Handle,
) -> Result<AsyncDispatcher, CoachError> {
    let api_key = resolve_api_key(&config.credentials)?;
    let client = ClaudeClient::new(claude_config(api_key, &config.model))
        .map_err(|e| CoachError::Ai(e.to_string()))?;
    tracing::info!(model = client.model(), "chat client ready");

    let rules = load_rules_or_placeholder(&config.data.rules_path);
    let session = ConversationSession::new(rules);
    tracing::info!(session = %session.id(), "conversation session created");

    Ok(AsyncDispatcher::new(session, Arc::new(client), runtime))
}
