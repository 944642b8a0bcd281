//! Property-based tests for definitions, runs and enumeration.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated automata and inputs.

use dfa_engine::core::{
    Automaton, Definition, DefinitionViolation, EnumerationLimits, RunError,
};
use proptest::prelude::*;
use std::sync::Arc;

const SYMBOLS: [&str; 2] = ["a", "b"];

fn state(index: usize) -> String {
    format!("s{index}")
}

fn example() -> Arc<Definition<String, String>> {
    let s = |x: &str| x.to_string();
    Arc::new(
        Definition::new(
            [s("q0"), s("q1"), s("q2")],
            [s("0"), s("1")],
            [
                (s("q0"), s("0"), s("q1")),
                (s("q0"), s("1"), s("q0")),
                (s("q1"), s("0"), s("q2")),
                (s("q1"), s("1"), s("q0")),
                (s("q2"), s("0"), s("q2")),
                (s("q2"), s("1"), s("q2")),
            ],
            s("q0"),
            [s("q2")],
        )
        .unwrap(),
    )
}

prop_compose! {
    fn binary_input()(bits in prop::collection::vec(prop::bool::ANY, 0..24)) -> String {
        bits.into_iter().map(|bit| if bit { '1' } else { '0' }).collect()
    }
}

prop_compose! {
    /// Random, possibly partial, automaton over {a, b} with `n` states.
    fn arbitrary_definition()(n in 1usize..6)(
        table in prop::collection::vec(prop::option::of(0..n), n * 2),
        accept in prop::collection::vec(any::<bool>(), n),
        n in Just(n),
    ) -> Definition<String, String> {
        let transitions = table.iter().enumerate().filter_map(|(slot, target)| {
            target.map(|to| (state(slot / 2), SYMBOLS[slot % 2].to_string(), state(to)))
        });
        let accept = accept
            .iter()
            .enumerate()
            .filter(|(_, accepting)| **accepting)
            .map(|(index, _)| state(index));

        Definition::new(
            (0..n).map(state),
            SYMBOLS.iter().map(|s| s.to_string()),
            transitions,
            state(0),
            accept,
        )
        .unwrap()
    }
}

proptest! {
    #[test]
    fn step_is_deterministic(from in 0usize..3, bit in 0usize..2) {
        let definition = example();
        let state = format!("q{from}");
        let symbol = bit.to_string();

        let mut first = Automaton::new(Arc::clone(&definition));
        let mut second = Automaton::new(Arc::clone(&definition));

        let next1 = first.step(&state, &symbol).unwrap();
        let next2 = second.step(&state, &symbol).unwrap();

        prop_assert_eq!(next1, next2);
        prop_assert_eq!(first.history(), second.history());
    }

    #[test]
    fn reset_always_returns_to_start(input in binary_input()) {
        let mut automaton = Automaton::new(example());
        automaton.run_str(&input).unwrap();
        automaton.reset();

        prop_assert_eq!(automaton.current(), "q0");
        prop_assert!(automaton.history().is_empty());
    }

    #[test]
    fn history_reconstructs_state_path(input in binary_input()) {
        let mut automaton = Automaton::new(example());
        automaton.run_str(&input).unwrap();

        let history = automaton.history();
        prop_assert_eq!(history.len(), input.len());

        let mut expected = "q0".to_string();
        for (transition, symbol) in history.transitions().iter().zip(input.chars()) {
            prop_assert_eq!(&transition.from, &expected);
            prop_assert_eq!(transition.symbol.clone(), symbol.to_string());
            expected = transition.to.clone();
        }
        prop_assert_eq!(automaton.current(), &expected);
    }

    #[test]
    fn run_matches_table_lookup(
        definition in arbitrary_definition(),
        input in prop::collection::vec(0usize..2, 0..12),
    ) {
        let symbols: Vec<String> = input.iter().map(|i| SYMBOLS[*i].to_string()).collect();

        let mut expected = Some(definition.start().clone());
        for symbol in &symbols {
            expected = expected.and_then(|s| definition.transition(&s, symbol).cloned());
        }

        let mut automaton = Automaton::new(Arc::new(definition.clone()));
        match automaton.run(symbols.clone()) {
            Ok(accepted) => {
                let end = expected.unwrap();
                prop_assert_eq!(accepted, definition.is_accept_state(&end));
            }
            Err(RunError::UnknownTransition { .. }) => prop_assert!(expected.is_none()),
            Err(other) => prop_assert!(false, "unexpected error {}", other),
        }
    }

    #[test]
    fn enumeration_is_finite_and_sound(definition in arbitrary_definition()) {
        let language = definition.enumerate_language();
        let mut automaton = Automaton::new(Arc::new(definition.clone()));

        for word in &language {
            prop_assert!(word.len() < definition.states().len());
            prop_assert!(automaton.check_membership_str(word), "{} not accepted", word);
        }
    }

    #[test]
    fn enumeration_is_reproducible(definition in arbitrary_definition()) {
        prop_assert_eq!(definition.enumerate_language(), definition.enumerate_language());
    }

    #[test]
    fn depth_limit_yields_subset(definition in arbitrary_definition(), depth in 0usize..4) {
        let bounded = definition
            .enumerate_language_within(EnumerationLimits::unbounded().max_depth(depth))
            .unwrap();
        let full = definition.enumerate_language();

        prop_assert!(bounded.is_subset(&full));
        prop_assert!(bounded.iter().all(|word| word.len() <= depth));
    }

    #[test]
    fn unknown_start_is_always_rejected(suffix in "[a-z]{1,6}") {
        let start = format!("missing_{suffix}");
        let result = Definition::new(
            [state(0)],
            ["a".to_string()],
            Vec::new(),
            start.clone(),
            Vec::new(),
        );

        let error = result.unwrap_err();
        let violation = DefinitionViolation::UnknownStartState { state: start };
        prop_assert!(error.contains(&violation), "missing {:?}", violation);
    }

    #[test]
    fn transition_to_unknown_state_is_rejected(target in 5usize..50) {
        let result = Definition::new(
            (0..3).map(state),
            ["a".to_string()],
            [(state(0), "a".to_string(), state(target))],
            state(0),
            Vec::new(),
        );

        prop_assert!(result.is_err());
    }
}
