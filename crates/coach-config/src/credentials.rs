//! API key resolution.
//!
//! The key is looked up in the process environment first, then in a local
//! `KEY=value` file. Nothing here is fatal: a missing key is reported as
//! `ConfigError::MissingCredential` and the caller decides how to degrade.

use std::path::Path;

use coach_common::ConfigError;
use tracing::{debug, info};

use crate::schema::CredentialsConfig;

/// Resolve the API key from the real process environment.
pub fn resolve_api_key(config: &CredentialsConfig) -> Result<String, ConfigError> {
    resolve_api_key_with(config, |var| std::env::var(var).ok())
}

/// Resolve the API key using `env` as the environment lookup.
pub fn resolve_api_key_with(
    config: &CredentialsConfig,
    env: impl Fn(&str) -> Option<String>,
) -> Result<String, ConfigError> {
    let var = config.env_var.as_str();

    if let Some(value) = env(var).map(|v| v.trim().to_string()) {
        if !value.is_empty() {
            info!("API key loaded from ${var}");
            return Ok(value);
        }
    }

    if let Some(value) = read_key_file(&config.key_file, var) {
        info!("API key loaded from {}", config.key_file.display());
        return Ok(value);
    }

    Err(ConfigError::MissingCredential(format!(
        "set the {var} environment variable or add a {var}=... line to {}",
        config.key_file.display()
    )))
}

/// Find the first non-empty `key=value` line for `key` in `path`.
///
/// Unreadable files are treated as having no entry.
pub fn read_key_file(path: &Path, key: &str) -> Option<String> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            debug!("key file {} not readable: {e}", path.display());
            return None;
        }
    };

    content.lines().find_map(|line| {
        let (k, v) = line.trim_start().split_once('=')?;
        let v = v.trim();
        (k.trim_end() == key && !v.is_empty()).then(|| v.to_string())
    })
}
