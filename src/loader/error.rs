//! Loader error types.

use crate::core::InvalidDefinition;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a definition
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON definition: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed text definition at line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error(transparent)]
    Invalid(#[from] InvalidDefinition),
}
