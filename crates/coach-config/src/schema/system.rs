//! Credential lookup and logging settings.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the API key is looked up, in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialsConfig {
    /// Environment variable checked first.
    pub env_var: String,
    /// `KEY=value` file checked second, using `env_var` as the key.
    pub key_file: PathBuf,
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            env_var: "CLAUDE_API_KEY".to_string(),
            key_file: PathBuf::from("config.ini"),
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Filter directive scoped to this workspace's crates.
    pub fn directive(self) -> &'static str {
        match self {
            Self::Trace => "coach=trace",
            Self::Debug => "coach=debug",
            Self::Info => "coach=info",
            Self::Warn => "coach=warn",
            Self::Error => "coach=error",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
