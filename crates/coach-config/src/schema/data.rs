//! Locations of the static assets: exercise bank and rules document.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Tiers shown in the sidebar, easiest first.
pub const DEFAULT_TIERS: &[&str] = &[
    "beginner",
    "late-beginner",
    "early-intermediate",
    "intermediate",
    "upper-intermediate",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub exercises_path: PathBuf,
    pub rules_path: PathBuf,
    /// Ordered tier identifiers. Must match the keys of the exercise file.
    pub tiers: Vec<String>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            exercises_path: PathBuf::from("data/exercises.json"),
            rules_path: PathBuf::from("data/rules.txt"),
            tiers: DEFAULT_TIERS.iter().map(|t| t.to_string()).collect(),
        }
    }
}
