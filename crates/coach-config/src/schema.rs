//! Configuration schema types for coach.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod data;
mod model;
mod system;

pub use data::*;
pub use model::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
///
/// Every option has a default; a missing or empty `coach.toml` is valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CoachConfig {
    pub model: ModelConfig,
    pub data: DataConfig,
    pub credentials: CredentialsConfig,
    pub logging: LoggingConfig,
}
