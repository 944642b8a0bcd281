//! Immutable, validated automaton definitions.

use super::error::{DefinitionViolation, InvalidDefinition};
use super::state::{State, Symbol};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;

type Check = Validation<(), NonEmptyVec<DefinitionViolation>>;

/// The five components of a DFA: states, alphabet, transition table, start
/// state and accept states.
///
/// A `Definition` can only be obtained through [`Definition::new`] (or the
/// builder and loaders that call it), so every value of this type satisfies
/// the invariants: start and accept states are known states and every
/// transition stays inside the states and alphabet. It is never mutated
/// afterwards and is meant to be shared through an `Arc` by any number of
/// [`Automaton`](super::Automaton) cursors.
///
/// # Example
///
/// ```rust
/// use dfa_engine::core::Definition;
///
/// let s = |x: &str| x.to_string();
/// let definition = Definition::new(
///     [s("even"), s("odd")],
///     [s("1")],
///     [(s("even"), s("1"), s("odd")), (s("odd"), s("1"), s("even"))],
///     s("even"),
///     [s("even")],
/// )
/// .unwrap();
///
/// assert_eq!(definition.transition(&s("odd"), &s("1")), Some(&s("even")));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Definition<S: State, A: Symbol> {
    states: BTreeSet<S>,
    alphabet: BTreeSet<A>,
    transitions: BTreeMap<S, BTreeMap<A, S>>,
    start: S,
    accept: BTreeSet<S>,
}

impl<S: State, A: Symbol> Definition<S, A> {
    /// Validate a candidate definition.
    ///
    /// All invariants are checked and every violation is reported, not
    /// just the first one. Listing the same `(state, symbol)` key twice
    /// with the same target is harmless; with different targets it is a
    /// [`DefinitionViolation::ConflictingTransition`].
    pub fn new(
        states: impl IntoIterator<Item = S>,
        alphabet: impl IntoIterator<Item = A>,
        transitions: impl IntoIterator<Item = (S, A, S)>,
        start: S,
        accept: impl IntoIterator<Item = S>,
    ) -> Result<Self, InvalidDefinition> {
        let states: BTreeSet<S> = states.into_iter().collect();
        let alphabet: BTreeSet<A> = alphabet.into_iter().collect();
        let accept: BTreeSet<S> = accept.into_iter().collect();

        let mut checks: Vec<Check> = Vec::new();

        if states.is_empty() {
            checks.push(Validation::fail(DefinitionViolation::EmptyStates));
        }
        if alphabet.is_empty() {
            checks.push(Validation::fail(DefinitionViolation::EmptyAlphabet));
        }

        checks.push(if states.contains(&start) {
            Validation::success(())
        } else {
            Validation::fail(DefinitionViolation::UnknownStartState {
                state: start.name().to_string(),
            })
        });

        for state in accept.difference(&states) {
            checks.push(Validation::fail(DefinitionViolation::UnknownAcceptState {
                state: state.name().to_string(),
            }));
        }

        let mut table: BTreeMap<S, BTreeMap<A, S>> = BTreeMap::new();
        let mut entries = 0usize;
        for (from, symbol, to) in transitions {
            checks.extend(check_transition(&states, &alphabet, &from, &symbol, &to));

            match table.get(&from).and_then(|row| row.get(&symbol)) {
                Some(existing) if *existing != to => {
                    checks.push(Validation::fail(
                        DefinitionViolation::ConflictingTransition {
                            state: from.name().to_string(),
                            symbol: symbol.name().to_string(),
                            first: existing.name().to_string(),
                            second: to.name().to_string(),
                        },
                    ));
                }
                Some(_) => {}
                None => {
                    table.entry(from).or_default().insert(symbol, to);
                    entries += 1;
                }
            }
        }

        match Validation::all_vec(checks).map(|_| ()) {
            Validation::Success(()) => {
                debug!(
                    states = states.len(),
                    symbols = alphabet.len(),
                    transitions = entries,
                    accept = accept.len(),
                    "definition validated"
                );
                Ok(Self {
                    states,
                    alphabet,
                    transitions: table,
                    start,
                    accept,
                })
            }
            Validation::Failure(errors) => {
                let violations: Vec<DefinitionViolation> = errors.iter().cloned().collect();
                debug!(violations = violations.len(), "definition rejected");
                Err(InvalidDefinition { violations })
            }
        }
    }

    /// Every state, in order.
    pub fn states(&self) -> &BTreeSet<S> {
        &self.states
    }

    /// The input symbols, in order.
    pub fn alphabet(&self) -> &BTreeSet<A> {
        &self.alphabet
    }

    /// The state every run begins in.
    pub fn start(&self) -> &S {
        &self.start
    }

    /// States in which a run is accepted.
    pub fn accept_states(&self) -> &BTreeSet<S> {
        &self.accept
    }

    /// Iterate the transition table as `(from, symbol, to)` in key order.
    pub fn transitions(&self) -> impl Iterator<Item = (&S, &A, &S)> + '_ {
        self.transitions.iter().flat_map(|(from, row)| {
            row.iter().map(move |(symbol, to)| (from, symbol, to))
        })
    }

    /// Number of defined `(state, symbol)` pairs.
    pub fn transition_count(&self) -> usize {
        self.transitions.values().map(BTreeMap::len).sum()
    }

    /// Look up `δ(state, symbol)`. `None` means the table is partial there.
    pub fn transition(&self, state: &S, symbol: &A) -> Option<&S> {
        self.transitions.get(state).and_then(|row| row.get(symbol))
    }

    /// Whether `state` is an accept state.
    pub fn is_accept_state(&self, state: &S) -> bool {
        self.accept.contains(state)
    }

    /// Whether `symbol` belongs to the alphabet.
    pub fn contains_symbol(&self, symbol: &A) -> bool {
        self.alphabet.contains(symbol)
    }
}

fn check_transition<S: State, A: Symbol>(
    states: &BTreeSet<S>,
    alphabet: &BTreeSet<A>,
    from: &S,
    symbol: &A,
    to: &S,
) -> Vec<Check> {
    let mut checks = Vec::new();

    if !states.contains(from) {
        checks.push(Validation::fail(
            DefinitionViolation::UnknownTransitionSource {
                state: from.name().to_string(),
                symbol: symbol.name().to_string(),
            },
        ));
    }
    if !alphabet.contains(symbol) {
        checks.push(Validation::fail(
            DefinitionViolation::UnknownTransitionSymbol {
                state: from.name().to_string(),
                symbol: symbol.name().to_string(),
            },
        ));
    }
    if !states.contains(to) {
        checks.push(Validation::fail(
            DefinitionViolation::UnknownTransitionTarget {
                state: from.name().to_string(),
                symbol: symbol.name().to_string(),
                target: to.name().to_string(),
            },
        ));
    }

    checks
}

fn render_set<'a>(names: impl Iterator<Item = &'a str>) -> String {
    format!("{{{}}}", names.collect::<Vec<_>>().join(", "))
}

impl<S: State, A: Symbol> fmt::Display for Definition<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "States: {}", render_set(self.states.iter().map(State::name)))?;
        writeln!(
            f,
            "Alphabet: {}",
            render_set(self.alphabet.iter().map(Symbol::name))
        )?;
        writeln!(f, "Transitions:")?;
        for (from, symbol, to) in self.transitions() {
            writeln!(f, "  δ({}, {}) -> {}", from.name(), symbol.name(), to.name())?;
        }
        writeln!(f, "Start state: {}", self.start.name())?;
        write!(
            f,
            "Accept states: {}",
            render_set(self.accept.iter().map(State::name))
        )
    }
}
