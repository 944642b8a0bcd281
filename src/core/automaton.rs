//! Per-evaluation cursor over a shared definition.

use super::definition::Definition;
use super::error::RunError;
use super::history::{History, StateTransition};
use super::state::{State, Symbol};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, trace};

/// A running DFA: a shared, immutable [`Definition`] plus this evaluation's
/// current state and transition history.
///
/// Cursors are cheap. Create one per logical evaluation and share the
/// definition between them; all mutating methods take `&mut self`.
///
/// # Example
///
/// ```rust
/// use dfa_engine::core::{Automaton, Definition};
/// use std::sync::Arc;
///
/// let s = |x: &str| x.to_string();
/// let definition = Arc::new(
///     Definition::new(
///         [s("q0"), s("q1"), s("q2")],
///         [s("0"), s("1")],
///         [
///             (s("q0"), s("0"), s("q1")),
///             (s("q0"), s("1"), s("q0")),
///             (s("q1"), s("0"), s("q2")),
///             (s("q1"), s("1"), s("q0")),
///             (s("q2"), s("0"), s("q2")),
///             (s("q2"), s("1"), s("q2")),
///         ],
///         s("q0"),
///         [s("q2")],
///     )
///     .unwrap(),
/// );
///
/// let mut automaton = Automaton::new(Arc::clone(&definition));
/// assert!(automaton.run_str("001").unwrap());
/// assert_eq!(automaton.history().len(), 3);
/// assert!(!automaton.check_membership_str("012"));
/// ```
#[derive(Clone, Debug)]
pub struct Automaton<S: State, A: Symbol> {
    definition: Arc<Definition<S, A>>,
    current: S,
    history: History<S, A>,
    /// Symbols consumed by `advance`/`run` since the last reset.
    consumed: usize,
}

impl<S: State, A: Symbol> Automaton<S, A> {
    /// Create a cursor positioned at the definition's start state.
    pub fn new(definition: Arc<Definition<S, A>>) -> Self {
        let current = definition.start().clone();
        Self {
            definition,
            current,
            history: History::new(),
            consumed: 0,
        }
    }

    pub(crate) fn from_parts(
        definition: Arc<Definition<S, A>>,
        current: S,
        history: History<S, A>,
        consumed: usize,
    ) -> Self {
        Self {
            definition,
            current,
            history,
            consumed,
        }
    }

    /// The shared definition this cursor runs over.
    pub fn definition(&self) -> &Arc<Definition<S, A>> {
        &self.definition
    }

    /// The state the last consumed symbol led to.
    pub fn current(&self) -> &S {
        &self.current
    }

    /// Every transition recorded since the last reset, `step`s included.
    pub fn history(&self) -> &History<S, A> {
        &self.history
    }

    /// Number of input symbols consumed since the last reset.
    ///
    /// Unlike `history().len()`, this ignores transitions recorded by
    /// [`step`](Self::step).
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Return to the start state and forget the history.
    pub fn reset(&mut self) {
        self.current = self.definition.start().clone();
        self.history.clear();
        self.consumed = 0;
    }

    /// Apply `δ(state, symbol)` and record it.
    ///
    /// Does not move the current state; [`advance`](Self::advance) and
    /// [`run`](Self::run) do that.
    pub fn step(&mut self, state: &S, symbol: &A) -> Result<S, RunError> {
        let Some(next) = self.definition.transition(state, symbol) else {
            return Err(RunError::UnknownTransition {
                state: state.name().to_string(),
                symbol: symbol.name().to_string(),
            });
        };
        let next = next.clone();

        trace!(
            from = state.name(),
            symbol = symbol.name(),
            to = next.name(),
            "transition"
        );
        self.history.record(StateTransition {
            from: state.clone(),
            symbol: symbol.clone(),
            to: next.clone(),
        });
        Ok(next)
    }

    /// Consume one symbol from the current state.
    ///
    /// The symbol must belong to the alphabet. Errors report the number of
    /// symbols consumed since the last reset as the position.
    pub fn advance(&mut self, symbol: A) -> Result<&S, RunError> {
        self.consume(symbol)?;
        Ok(&self.current)
    }

    fn consume(&mut self, symbol: A) -> Result<(), RunError> {
        if !self.definition.contains_symbol(&symbol) {
            return Err(RunError::SymbolNotInAlphabet {
                symbol: symbol.name().to_string(),
                position: self.consumed,
            });
        }
        let current = self.current.clone();
        self.current = self.step(&current, &symbol)?;
        self.consumed += 1;
        Ok(())
    }

    /// Reset, then consume `input` in order and report acceptance.
    ///
    /// The first symbol outside the alphabet, or the first missing
    /// transition, aborts the run. Transitions taken before that point stay
    /// in the history.
    pub fn run<I>(&mut self, input: I) -> Result<bool, RunError>
    where
        I: IntoIterator<Item = A>,
    {
        self.reset();
        for symbol in input {
            if let Err(error) = self.consume(symbol) {
                debug!(%error, consumed = self.consumed, "run aborted");
                return Err(error);
            }
        }

        let accepted = self.is_accepting();
        debug!(
            state = self.current.name(),
            consumed = self.consumed,
            accepted,
            "run finished"
        );
        Ok(accepted)
    }

    /// Is the current state an accept state?
    pub fn is_accepting(&self) -> bool {
        self.definition.is_accept_state(&self.current)
    }

    /// [`run`](Self::run) with every run-time error folded into `false`.
    pub fn check_membership<I>(&mut self, input: I) -> bool
    where
        I: IntoIterator<Item = A>,
    {
        self.run(input).unwrap_or(false)
    }

    /// See [`Definition::enumerate_language`]. Leaves this cursor untouched.
    pub fn enumerate_language(&self) -> BTreeSet<String> {
        self.definition.enumerate_language()
    }
}

impl<S: State> Automaton<S, String> {
    /// Run a string whose every `char` is one symbol.
    pub fn run_str(&mut self, input: &str) -> Result<bool, RunError> {
        self.run(input.chars().map(String::from))
    }

    /// [`check_membership`](Self::check_membership) over the `char`s of `input`.
    pub fn check_membership_str(&mut self, input: &str) -> bool {
        self.check_membership(input.chars().map(String::from))
    }
}
