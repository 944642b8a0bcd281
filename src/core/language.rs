//! Enumeration of the language accepted by a definition.
//!
//! The traversal is a depth-first walk from the start state that never
//! re-enters a state already on the current path. Each branch owns its own
//! copy of the visited set, so a state blocked on one path can still be
//! reached along a sibling path with a different prefix.
//!
//! Because no state repeats on a path, every path has at most `|states|`
//! nodes and the walk always terminates. The price is completeness: strings
//! whose run visits some state twice are never produced, so for automata
//! with a productive cycle the result is a finite under-approximation of
//! the (infinite) accepted language. Callers that need longer strings
//! should drive [`Automaton::check_membership`](super::Automaton::check_membership)
//! directly.

use super::definition::Definition;
use super::error::EnumerationError;
use super::state::{State, Symbol};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// Cutoffs for [`Definition::enumerate_language_within`].
///
/// Per-path-copy DFS can expand exponentially many frames on densely
/// connected automata. Both limits default to `None` (unbounded).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumerationLimits {
    /// Longest accumulated string (in symbols) that is still expanded.
    pub max_depth: Option<usize>,
    /// Maximum number of frames expanded before giving up.
    pub max_nodes: Option<usize>,
}

impl EnumerationLimits {
    /// No cutoffs at all.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Stop expanding paths `depth` symbols long.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Give up after `nodes` frames.
    pub fn max_nodes(mut self, nodes: usize) -> Self {
        self.max_nodes = Some(nodes);
        self
    }
}

/// One pending branch of the walk.
struct Frame<S> {
    state: S,
    accumulated: String,
    depth: usize,
    visited: BTreeSet<S>,
}

struct Walk {
    language: BTreeSet<String>,
    expanded: usize,
    /// The node budget that stopped the walk, if one did.
    exhausted: Option<usize>,
}

fn walk<S: State, A: Symbol>(definition: &Definition<S, A>, limits: EnumerationLimits) -> Walk {
    let mut language = BTreeSet::new();
    let mut expanded = 0usize;
    let mut stack = vec![Frame {
        state: definition.start().clone(),
        accumulated: String::new(),
        depth: 0,
        visited: BTreeSet::new(),
    }];

    // Children are filtered against the path before they are pushed, so a
    // popped frame never revisits a state.
    while let Some(frame) = stack.pop() {
        if let Some(budget) = limits.max_nodes.filter(|budget| expanded >= *budget) {
            return Walk {
                language,
                expanded,
                exhausted: Some(budget),
            };
        }
        expanded += 1;

        if definition.is_accept_state(&frame.state) {
            language.insert(frame.accumulated.clone());
        }

        if limits.max_depth.is_some_and(|depth| frame.depth >= depth) {
            continue;
        }

        let mut visited = frame.visited;
        visited.insert(frame.state.clone());

        // Pushed in reverse so the smallest symbol is explored first.
        for symbol in definition.alphabet().iter().rev() {
            if let Some(next) = definition.transition(&frame.state, symbol) {
                if visited.contains(next) {
                    continue;
                }
                let mut accumulated = frame.accumulated.clone();
                accumulated.push_str(symbol.name());
                stack.push(Frame {
                    state: next.clone(),
                    accumulated,
                    depth: frame.depth + 1,
                    visited: visited.clone(),
                });
            }
        }
    }

    Walk {
        language,
        expanded,
        exhausted: None,
    }
}

impl<S: State, A: Symbol> Definition<S, A> {
    /// Every accepted string reachable without repeating a state on the
    /// path, rendered by concatenating symbol names.
    ///
    /// Always terminates. See the module docs for why this is an
    /// under-approximation when the automaton has cycles.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dfa_engine::core::Definition;
    ///
    /// let s = |x: &str| x.to_string();
    /// let definition = Definition::new(
    ///     [s("q0"), s("q1"), s("q2")],
    ///     [s("0"), s("1")],
    ///     [
    ///         (s("q0"), s("0"), s("q1")),
    ///         (s("q0"), s("1"), s("q0")),
    ///         (s("q1"), s("0"), s("q2")),
    ///         (s("q1"), s("1"), s("q0")),
    ///         (s("q2"), s("0"), s("q2")),
    ///         (s("q2"), s("1"), s("q2")),
    ///     ],
    ///     s("q0"),
    ///     [s("q2")],
    /// )
    /// .unwrap();
    ///
    /// let language = definition.enumerate_language();
    /// assert!(language.contains("00"));
    /// ```
    pub fn enumerate_language(&self) -> BTreeSet<String> {
        let walk = walk(self, EnumerationLimits::unbounded());
        debug!(
            strings = walk.language.len(),
            expanded = walk.expanded,
            "language enumerated"
        );
        walk.language
    }

    /// Like [`enumerate_language`](Self::enumerate_language), with cutoffs.
    ///
    /// A depth limit silently drops longer strings. Running out of the node
    /// budget is an error that still hands back what was found.
    pub fn enumerate_language_within(
        &self,
        limits: EnumerationLimits,
    ) -> Result<BTreeSet<String>, EnumerationError> {
        let walk = walk(self, limits);
        if let Some(budget) = walk.exhausted {
            warn!(
                budget,
                strings = walk.language.len(),
                "enumeration node budget exhausted"
            );
            return Err(EnumerationError::BudgetExceeded {
                budget,
                partial: walk.language,
            });
        }
        debug!(
            strings = walk.language.len(),
            expanded = walk.expanded,
            "bounded language enumerated"
        );
        Ok(walk.language)
    }
}
