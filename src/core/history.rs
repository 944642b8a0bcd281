//! Transition history tracking.
//!
//! A history is the ordered log of transitions an automaton took since its
//! last reset. Entries are only ever appended during a run; a reset clears
//! the whole log.

use super::state::{State, Symbol};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Record of a single transition: `δ(from, symbol) = to`.
///
/// # Example
///
/// ```rust
/// use dfa_engine::core::StateTransition;
///
/// let transition = StateTransition {
///     from: "q0".to_string(),
///     symbol: "0".to_string(),
///     to: "q1".to_string(),
/// };
/// assert_eq!(transition.to_string(), "δ(q0, 0) -> q1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State, A: Symbol> {
    /// The state being transitioned from
    pub from: S,
    /// The symbol consumed
    pub symbol: A,
    /// The state being transitioned to
    pub to: S,
}

impl<S: State, A: Symbol> fmt::Display for StateTransition<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "δ({}, {}) -> {}",
            self.from.name(),
            self.symbol.name(),
            self.to.name()
        )
    }
}

/// Ordered history of transitions.
///
/// # Example
///
/// ```rust
/// use dfa_engine::core::{History, StateTransition};
///
/// let mut history = History::new();
/// history.record(StateTransition {
///     from: "q0".to_string(),
///     symbol: "0".to_string(),
///     to: "q1".to_string(),
/// });
/// history.record(StateTransition {
///     from: "q1".to_string(),
///     symbol: "0".to_string(),
///     to: "q2".to_string(),
/// });
///
/// let path = history.path();
/// assert_eq!(path.len(), 3); // q0 -> q1 -> q2
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct History<S: State, A: Symbol> {
    transitions: Vec<StateTransition<S, A>>,
}

impl<S: State, A: Symbol> Default for History<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, A: Symbol> History<S, A> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Append a transition to the end of the log.
    pub fn record(&mut self, transition: StateTransition<S, A>) {
        self.transitions.push(transition);
    }

    /// Drop every recorded transition.
    pub fn clear(&mut self) {
        self.transitions.clear();
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the first transition followed by the
    /// `to` state of every transition. Empty when nothing was recorded.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Symbols consumed, in order.
    pub fn symbols(&self) -> Vec<&A> {
        self.transitions.iter().map(|t| &t.symbol).collect()
    }

    /// Get all transitions.
    pub fn transitions(&self) -> &[StateTransition<S, A>] {
        &self.transitions
    }

    /// Number of recorded transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

impl<'a, S: State, A: Symbol> IntoIterator for &'a History<S, A> {
    type Item = &'a StateTransition<S, A>;
    type IntoIter = std::slice::Iter<'a, StateTransition<S, A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.transitions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transition(from: &str, symbol: &str, to: &str) -> StateTransition<String, String> {
        StateTransition {
            from: from.to_string(),
            symbol: symbol.to_string(),
            to: to.to_string(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: History<String, String> = History::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert!(history.path().is_empty());
        assert!(history.symbols().is_empty());
    }

    #[test]
    fn record_appends_in_order() {
        let mut history = History::new();
        history.record(transition("q0", "0", "q1"));
        history.record(transition("q1", "1", "q0"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.transitions()[0], transition("q0", "0", "q1"));
        assert_eq!(history.transitions()[1], transition("q1", "1", "q0"));
    }

    #[test]
    fn path_returns_state_sequence() {
        let mut history = History::new();
        history.record(transition("q0", "0", "q1"));
        history.record(transition("q1", "0", "q2"));

        let path = history.path();
        assert_eq!(path, vec!["q0", "q1", "q2"]);
        assert_eq!(history.symbols(), vec!["0", "0"]);
    }

    #[test]
    fn clear_empties_history() {
        let mut history = History::new();
        history.record(transition("q0", "0", "q1"));
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn transition_renders_as_delta() {
        assert_eq!(
            transition("q2", "1", "q2").to_string(),
            "δ(q2, 1) -> q2"
        );
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = History::new();
        history.record(transition("q0", "0", "q1"));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: History<String, String> = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}
