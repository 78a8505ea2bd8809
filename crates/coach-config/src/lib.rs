//! coach configuration.
//!
//! Provides TOML-based configuration with validation, API key resolution
//! and rules document loading. All config sections use defaults so partial
//! (or absent) config files work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use coach_config::{load_config, resolve_api_key};
//!
//! let config = load_config(None).expect("failed to load config");
//! let key = resolve_api_key(&config.credentials);
//! println!("key configured: {}", key.is_ok());
//! ```

pub mod credentials;
pub mod rules;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use credentials::{read_key_file, resolve_api_key, resolve_api_key_with};
pub use rules::{load_rules, load_rules_or_placeholder, RULES_PLACEHOLDER};
pub use schema::CoachConfig;
pub use toml_loader::create_default_config;

use std::path::Path;

use coach_common::ConfigError;

/// Load config from `explicit`, or from the default search path.
///
/// Validation problems are logged by the loader rather than returned, so
/// the caller always gets a usable config when the file parses.
pub fn load_config(explicit: Option<&Path>) -> Result<CoachConfig, ConfigError> {
    toml_loader::load(explicit)
}

/// Serialize a config back to TOML, e.g. for `--print-config`.
pub fn config_to_toml(config: &CoachConfig) -> String {
    toml::to_string_pretty(config)
        .unwrap_or_else(|e| format!("# failed to serialize config: {e}\n"))
}
