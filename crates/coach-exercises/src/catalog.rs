//! Read-only exercise lookup by tier and index.

use std::collections::HashMap;
use std::path::Path;

use tracing::{info, warn};

use crate::error::CatalogError;
use crate::prompt::render_prompt;
use crate::ExerciseRecord;

/// Exercise bank grouped by difficulty tier.
///
/// Built once and never mutated. An empty catalog is a normal state: it is
/// what callers get when the backing file is missing or malformed.
#[derive(Debug, Clone, Default)]
pub struct ExerciseCatalog {
    tiers: Vec<String>,
    exercises: HashMap<String, Vec<ExerciseRecord>>,
}

impl ExerciseCatalog {
    /// Build a catalog from an ordered tier list and the records per tier.
    ///
    /// Tiers present in `exercises` but absent from `tiers` are still
    /// reachable through [`list_exercises`](Self::list_exercises) but are not
    /// listed.
    pub fn new(tiers: Vec<String>, exercises: HashMap<String, Vec<ExerciseRecord>>) -> Self {
        for tier in exercises.keys() {
            if !tiers.contains(tier) {
                warn!(tier = %tier, "exercise tier is not in the configured tier list");
            }
        }
        Self { tiers, exercises }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse the JSON exercise bank: an object mapping tier to record array.
    pub fn from_json(tiers: Vec<String>, json: &str) -> Result<Self, CatalogError> {
        let exercises: HashMap<String, Vec<ExerciseRecord>> = serde_json::from_str(json)?;
        Ok(Self::new(tiers, exercises))
    }

    pub fn load(path: &Path, tiers: Vec<String>) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(tiers, &json)?;
        info!(
            exercises = catalog.len(),
            "loaded exercise bank from {}",
            path.display()
        );
        Ok(catalog)
    }

    /// Like [`load`](Self::load), degrading to an empty catalog on failure.
    pub fn load_or_empty(path: &Path, tiers: Vec<String>) -> Self {
        Self::load(path, tiers).unwrap_or_else(|e| {
            warn!("{e}; starting with no exercises");
            Self::empty()
        })
    }

    pub fn list_tiers(&self) -> &[String] {
        &self.tiers
    }

    /// Records for `tier`; empty for an unknown tier.
    pub fn list_exercises(&self, tier: &str) -> &[ExerciseRecord] {
        self.exercises.get(tier).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn get(&self, tier: &str, index: usize) -> Option<&ExerciseRecord> {
        self.list_exercises(tier).get(index)
    }

    /// Prompt text for the exercise at `index` in `tier`, or `None` when the
    /// index is out of bounds for that tier.
    pub fn build_prompt(&self, tier: &str, index: usize) -> Option<String> {
        self.get(tier, index)
            .map(|record| render_prompt(tier, record))
    }

    /// Total number of exercises across all tiers.
    pub fn len(&self) -> usize {
        self.exercises.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
