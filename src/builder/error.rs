//! Build errors for the definition builder.

use crate::core::InvalidDefinition;
use thiserror::Error;

/// Errors that can occur when building definitions.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Start state not specified. Call .start(state) before .build()")]
    MissingStartState,

    #[error(transparent)]
    Invalid(#[from] InvalidDefinition),
}
