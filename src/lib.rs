//! dfa-engine: deterministic finite automata
//!
//! A definition (states, alphabet, transition table, start and accept
//! states) is validated once and then shared read-only. Evaluations run on
//! small cursors that own their current state and transition history.
//!
//! # Core Concepts
//!
//! - **Definition**: immutable, validated DFA components
//! - **Automaton**: a cursor that steps through input and records history
//! - **Language enumeration**: bounded depth-first walk over the definition
//! - **Loader**: JSON and text documents into definitions
//! - **Checkpoint**: snapshot and resume a cursor's run state
//!
//! # Example
//!
//! ```rust
//! use dfa_engine::builder::DefinitionBuilder;
//! use dfa_engine::core::Automaton;
//! use std::sync::Arc;
//!
//! let s = |x: &str| x.to_string();
//! let definition = DefinitionBuilder::new()
//!     .states([s("q0"), s("q1"), s("q2")])
//!     .alphabet([s("0"), s("1")])
//!     .transition(s("q0"), s("0"), s("q1"))
//!     .transition(s("q0"), s("1"), s("q0"))
//!     .transition(s("q1"), s("0"), s("q2"))
//!     .transition(s("q1"), s("1"), s("q0"))
//!     .transition(s("q2"), s("0"), s("q2"))
//!     .transition(s("q2"), s("1"), s("q2"))
//!     .start(s("q0"))
//!     .accept(s("q2"))
//!     .build()
//!     .unwrap();
//!
//! let mut automaton = Automaton::new(Arc::new(definition));
//! assert!(automaton.run_str("001").unwrap());
//! for transition in automaton.history() {
//!     println!("{transition}");
//! }
//! assert!(automaton.enumerate_language().contains("00"));
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod loader;

// Re-export commonly used types
pub use builder::{BuildError, DefinitionBuilder};
pub use checkpoint::{Checkpoint, CheckpointError};
pub use crate::core::{
    Automaton, Definition, DefinitionViolation, EnumerationError, EnumerationLimits, History,
    InvalidDefinition, RunError, State, StateTransition, Symbol,
};
pub use loader::LoadError;
