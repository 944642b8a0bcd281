//! Builder API for ergonomic definition construction.
//!
//! This module provides a fluent builder and macros for declaring automata
//! in code instead of loading them from a document.

pub mod definition;
pub mod error;
pub mod macros;

pub use definition::DefinitionBuilder;
pub use error::BuildError;

use crate::core::{Automaton, State, Symbol};

/// Build a complete automaton from a transition table, deriving the state
/// set and alphabet from the table itself.
///
/// Start and accept states are added to the state set as well, so only the
/// transitions need to be listed.
///
/// # Example
///
/// ```
/// use dfa_engine::builder::from_table;
///
/// let s = |x: &str| x.to_string();
/// let mut automaton = from_table(
///     [(s("even"), s("1"), s("odd")), (s("odd"), s("1"), s("even"))],
///     s("even"),
///     [s("even")],
/// )
/// .unwrap();
///
/// assert!(automaton.run_str("11").unwrap());
/// ```
pub fn from_table<S, A>(
    transitions: impl IntoIterator<Item = (S, A, S)>,
    start: S,
    accept: impl IntoIterator<Item = S>,
) -> Result<Automaton<S, A>, BuildError>
where
    S: State,
    A: Symbol,
{
    let accept: Vec<S> = accept.into_iter().collect();
    let mut builder = DefinitionBuilder::new()
        .state(start.clone())
        .states(accept.iter().cloned());

    for (from, symbol, to) in transitions {
        builder = builder
            .state(from.clone())
            .state(to.clone())
            .symbol(symbol.clone())
            .transition(from, symbol, to);
    }

    accept
        .into_iter()
        .fold(builder.start(start), DefinitionBuilder::accept)
        .build_automaton()
}
