//! Errors from loading the exercise bank.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read exercise file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed exercise data: {0}")]
    Malformed(#[from] serde_json::Error),
}
