//! Core automaton types and logic.
//!
//! This module contains the evaluation engine:
//! - State and symbol identifiers via the `State` and `Symbol` traits
//! - Validated, immutable definitions
//! - Per-evaluation cursors with transition history
//! - Language enumeration
//!
//! Definitions never change after construction; everything that mutates
//! lives in an [`Automaton`] cursor.

mod automaton;
mod definition;
mod error;
mod history;
mod language;
mod state;

pub use automaton::Automaton;
pub use definition::Definition;
pub use error::{DefinitionViolation, EnumerationError, InvalidDefinition, RunError};
pub use history::{History, StateTransition};
pub use language::EnumerationLimits;
pub use state::{State, Symbol};
