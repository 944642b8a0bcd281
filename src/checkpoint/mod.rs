//! Checkpoint and resume for automaton cursors.
//!
//! A checkpoint captures a cursor's run state (current state and history)
//! but not the definition, which the caller already holds. Resuming checks
//! that the snapshot still makes sense against the definition it is handed.

use crate::core::{Automaton, Definition, History, State, Symbol};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of an automaton's run state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Checkpoint<S: State, A: Symbol> {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Current state of the cursor
    pub current: S,

    /// Transitions recorded since the last reset
    pub history: History<S, A>,

    /// Input symbols consumed since the last reset
    pub consumed: usize,
}

impl<S: State, A: Symbol> Checkpoint<S, A> {
    /// Pretty-printed JSON encoding.
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::Encode(e.to_string()))
    }

    /// Parse a checkpoint written by [`to_json`](Self::to_json).
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json).map_err(|e| CheckpointError::Decode(e.to_string()))
    }

    /// Compact binary encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::Encode(e.to_string()))
    }

    /// Decode a checkpoint written by [`to_bytes`](Self::to_bytes).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::Decode(e.to_string()))
    }

    fn validate(&self, definition: &Definition<S, A>) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        if !definition.states().contains(&self.current) {
            return Err(CheckpointError::DefinitionMismatch(format!(
                "current state '{}' is not a state of the definition",
                self.current.name()
            )));
        }

        if self.consumed > self.history.len() {
            return Err(CheckpointError::DefinitionMismatch(format!(
                "{} symbols consumed but only {} transitions recorded",
                self.consumed,
                self.history.len()
            )));
        }

        for (index, entry) in self.history.transitions().iter().enumerate() {
            if definition.transition(&entry.from, &entry.symbol) != Some(&entry.to) {
                return Err(CheckpointError::DefinitionMismatch(format!(
                    "history entry {index} ({entry}) is not a transition of the definition"
                )));
            }
        }

        Ok(())
    }
}

impl<S: State, A: Symbol> Automaton<S, A> {
    /// Snapshot the current state and history.
    pub fn checkpoint(&self) -> Checkpoint<S, A> {
        Checkpoint {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            current: self.current().clone(),
            history: self.history().clone(),
            consumed: self.consumed(),
        }
    }

    /// Rebuild a cursor from a checkpoint taken against `definition`.
    ///
    /// Each history entry must be a transition of the definition, but the
    /// entries need not chain into a path from the start state ending at
    /// `current`: [`step`](Automaton::step) records transitions without
    /// moving the cursor.
    pub fn resume(
        definition: Arc<Definition<S, A>>,
        checkpoint: Checkpoint<S, A>,
    ) -> Result<Self, CheckpointError> {
        checkpoint.validate(&definition)?;
        debug!(
            id = %checkpoint.id,
            current = checkpoint.current.name(),
            transitions = checkpoint.history.len(),
            "resuming from checkpoint"
        );
        Ok(Automaton::from_parts(
            definition,
            checkpoint.current,
            checkpoint.history,
            checkpoint.consumed,
        ))
    }
}
