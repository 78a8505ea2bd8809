use serde::{Deserialize, Serialize};

/// A single exercise from the bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseRecord {
    pub title: String,
    pub description: String,
    pub example: String,
    pub hint: String,
}

impl ExerciseRecord {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        example: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            example: example.into(),
            hint: hint.into(),
        }
    }
}
