//! Session value types and errors.

use std::fmt;
use std::sync::Arc;

use crate::AiError;

/// Fixed instruction text sent with every request.
///
/// Cheap to clone; the text itself is never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemContext(Arc<str>);

impl SystemContext {
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SystemContext {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for SystemContext {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for SystemContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SessionError {
    #[error("message cannot be empty")]
    EmptyInput,
    #[error(transparent)]
    Transport(#[from] AiError),
}
