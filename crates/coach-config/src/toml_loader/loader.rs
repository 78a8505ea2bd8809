//! Core TOML config loading: read from an explicit path or search defaults.

use crate::schema::CoachConfig;
use crate::validation;
use coach_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::candidate_paths;

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// After loading, the config is validated; if validation fails, a warning
/// is logged and the parsed config is returned as-is.
pub fn load_from_path(path: &Path) -> Result<CoachConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::FileNotFound(path.to_path_buf())
        } else {
            ConfigError::ParseError(format!("failed to read {}: {e}", path.display()))
        }
    })?;

    let config: CoachConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}; keeping parsed values");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from `explicit` if given, otherwise from the first existing
/// default location.
///
/// An explicit path that does not exist is an error. When no default file
/// exists the built-in defaults are returned.
pub fn load(explicit: Option<&Path>) -> Result<CoachConfig, ConfigError> {
    if let Some(path) = explicit {
        return load_from_path(path);
    }

    for path in candidate_paths() {
        match load_from_path(&path) {
            Ok(config) => return Ok(config),
            Err(ConfigError::FileNotFound(_)) => continue,
            Err(e) => return Err(e),
        }
    }

    info!("no config file found, using defaults");
    Ok(CoachConfig::default())
}
