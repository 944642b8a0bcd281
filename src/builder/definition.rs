//! Builder for constructing definitions.

use crate::builder::error::BuildError;
use crate::core::{Automaton, Definition, State, Symbol};
use std::sync::Arc;

/// Builder for constructing definitions with a fluent API.
///
/// Nothing is checked until [`build`](Self::build), which hands everything
/// to [`Definition::new`].
pub struct DefinitionBuilder<S: State, A: Symbol> {
    states: Vec<S>,
    alphabet: Vec<A>,
    transitions: Vec<(S, A, S)>,
    start: Option<S>,
    accept: Vec<S>,
}

impl<S: State, A: Symbol> DefinitionBuilder<S, A> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            alphabet: Vec::new(),
            transitions: Vec::new(),
            start: None,
            accept: Vec::new(),
        }
    }

    /// Add one state.
    pub fn state(mut self, state: S) -> Self {
        self.states.push(state);
        self
    }

    /// Add several states at once.
    pub fn states(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.states.extend(states);
        self
    }

    /// Add one symbol to the alphabet.
    pub fn symbol(mut self, symbol: A) -> Self {
        self.alphabet.push(symbol);
        self
    }

    /// Add several symbols at once.
    pub fn alphabet(mut self, symbols: impl IntoIterator<Item = A>) -> Self {
        self.alphabet.extend(symbols);
        self
    }

    /// Add `δ(from, symbol) = to`.
    pub fn transition(mut self, from: S, symbol: A, to: S) -> Self {
        self.transitions.push((from, symbol, to));
        self
    }

    /// Set the start state (required).
    pub fn start(mut self, state: S) -> Self {
        self.start = Some(state);
        self
    }

    /// Mark a state as accepting.
    pub fn accept(mut self, state: S) -> Self {
        self.accept.push(state);
        self
    }

    /// Build and validate the definition.
    pub fn build(self) -> Result<Definition<S, A>, BuildError> {
        let start = self.start.ok_or(BuildError::MissingStartState)?;
        let definition = Definition::new(
            self.states,
            self.alphabet,
            self.transitions,
            start,
            self.accept,
        )?;
        Ok(definition)
    }

    /// Build the definition and wrap it in a fresh cursor.
    pub fn build_automaton(self) -> Result<Automaton<S, A>, BuildError> {
        Ok(Automaton::new(Arc::new(self.build()?)))
    }
}

impl<S: State, A: Symbol> Default for DefinitionBuilder<S, A> {
    fn default() -> Self {
        Self::new()
    }
}
