//! Rules document loading.

use std::path::Path;

use coach_common::ConfigError;
use tracing::{info, warn};

/// Stand-in system context when the rules document cannot be read.
pub const RULES_PLACEHOLDER: &str = "rules unavailable";

/// Read the rules document. An empty document is reported as a parse error.
pub fn load_rules(path: &Path) -> Result<String, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::FileNotFound(path.to_path_buf())
        } else {
            ConfigError::ParseError(format!("failed to read {}: {e}", path.display()))
        }
    })?;

    if content.trim().is_empty() {
        return Err(ConfigError::ParseError(format!(
            "rules document {} is empty",
            path.display()
        )));
    }

    info!(bytes = content.len(), "loaded rules from {}", path.display());
    Ok(content)
}

/// Like [`load_rules`], degrading to [`RULES_PLACEHOLDER`] on any failure.
pub fn load_rules_or_placeholder(path: &Path) -> String {
    load_rules(path).unwrap_or_else(|e| {
        warn!("{e}; using placeholder rules");
        RULES_PLACEHOLDER.to_string()
    })
}
