//! Exercise bank for coach.
//!
//! Loads exercise records grouped by difficulty tier from a JSON file and
//! renders the prompt sent to the model when one is picked.

pub mod catalog;
pub mod error;
pub mod prompt;
pub mod record;

pub use catalog::ExerciseCatalog;
pub use error::CatalogError;
pub use prompt::render_prompt;
pub use record::ExerciseRecord;
