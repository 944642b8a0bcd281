//! Checkpoint error types.

use thiserror::Error;

/// Errors that can occur while saving or resuming a cursor
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// The snapshot could not be written as JSON or binary
    #[error("Failed to encode checkpoint: {0}")]
    Encode(String),

    /// The bytes or text are not a checkpoint
    #[error("Failed to decode checkpoint: {0}")]
    Decode(String),

    #[error("Checkpoint format version {found} is not supported (expected {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The snapshot refers to states or transitions the definition lacks
    #[error("Checkpoint does not match the definition: {0}")]
    DefinitionMismatch(String),
}
