//! Errors raised by the automaton core.

use std::collections::BTreeSet;
use thiserror::Error;

/// A single broken invariant found while validating a definition.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DefinitionViolation {
    #[error("The set of states is empty")]
    EmptyStates,

    #[error("The alphabet is empty")]
    EmptyAlphabet,

    #[error("Start state '{state}' is not in the set of states")]
    UnknownStartState { state: String },

    #[error("Accept state '{state}' is not in the set of states")]
    UnknownAcceptState { state: String },

    #[error("Transition δ({state}, {symbol}) starts from unknown state '{state}'")]
    UnknownTransitionSource { state: String, symbol: String },

    #[error("Transition δ({state}, {symbol}) uses symbol '{symbol}' outside the alphabet")]
    UnknownTransitionSymbol { state: String, symbol: String },

    #[error("Transition δ({state}, {symbol}) leads to unknown state '{target}'")]
    UnknownTransitionTarget {
        state: String,
        symbol: String,
        target: String,
    },

    #[error("Transition δ({state}, {symbol}) is defined twice: '{first}' and '{second}'")]
    ConflictingTransition {
        state: String,
        symbol: String,
        first: String,
        second: String,
    },
}

/// Construction-time failure: the candidate definition breaks one or more
/// invariants. Every violation found is listed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid definition: {}", render_violations(.violations))]
pub struct InvalidDefinition {
    pub violations: Vec<DefinitionViolation>,
}

impl InvalidDefinition {
    /// Whether `violation` is among the reported violations.
    pub fn contains(&self, violation: &DefinitionViolation) -> bool {
        self.violations.contains(violation)
    }
}

fn render_violations(violations: &[DefinitionViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Run-time failures while consuming input.
///
/// Both kinds abort the current run. Transitions recorded before the
/// failure stay in the history and the automaton remains usable.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RunError {
    #[error("Symbol '{symbol}' at position {position} is not in the alphabet")]
    SymbolNotInAlphabet { symbol: String, position: usize },

    #[error("No transition defined for δ({state}, {symbol})")]
    UnknownTransition { state: String, symbol: String },
}

/// Failures of budgeted language enumeration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EnumerationError {
    #[error("Enumeration node budget ({budget}) exhausted after finding {} strings", .partial.len())]
    BudgetExceeded {
        budget: usize,
        partial: BTreeSet<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_definition_lists_every_violation() {
        let error = InvalidDefinition {
            violations: vec![
                DefinitionViolation::UnknownStartState {
                    state: "q9".to_string(),
                },
                DefinitionViolation::EmptyAlphabet,
            ],
        };

        let message = error.to_string();
        assert!(message.contains("Start state 'q9'"));
        assert!(message.contains("The alphabet is empty"));
        assert!(error.contains(&DefinitionViolation::EmptyAlphabet));
    }

    #[test]
    fn run_errors_name_their_context() {
        let error = RunError::SymbolNotInAlphabet {
            symbol: "2".to_string(),
            position: 2,
        };
        assert_eq!(
            error.to_string(),
            "Symbol '2' at position 2 is not in the alphabet"
        );

        let error = RunError::UnknownTransition {
            state: "q1".to_string(),
            symbol: "b".to_string(),
        };
        assert_eq!(error.to_string(), "No transition defined for δ(q1, b)");
    }
}
