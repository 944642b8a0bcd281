//! Reference Session
//!
//! Loads the "contains 00" automaton from a JSON document and walks one
//! cursor through a series of inputs, printing the definition, the
//! transition history, the current state and the enumerated language.
//!
//! Key concepts:
//! - Loading a definition from JSON
//! - Running inputs and inspecting the history afterwards
//! - Membership checks that fold foreign symbols into `false`
//!
//! Run with: cargo run --example reference_session

use dfa_engine::core::{Automaton, RunError};
use dfa_engine::loader;
use std::sync::Arc;

const DEFINITION: &str = r#"
{
    "states": ["q0", "q1", "q2"],
    "alphabet": ["0", "1"],
    "transition_function": [
        ["q0", "0", "q1"],
        ["q0", "1", "q0"],
        ["q1", "0", "q2"],
        ["q1", "1", "q0"],
        ["q2", "0", "q2"],
        ["q2", "1", "q2"]
    ],
    "start_state": "q0",
    "accept_states": ["q2"]
}
"#;

const RULE: &str = "********************************************************";

fn report_run(dfa: &mut Automaton<String, String>, input: &str) {
    match dfa.run_str(input) {
        Ok(true) => println!("  - '{input}' is accepted"),
        Ok(false) => println!("  - '{input}' is not accepted"),
        Err(error) => println!("  - '{input}' could not be run: {error}"),
    }
}

fn report_membership(dfa: &mut Automaton<String, String>, input: &str) {
    if dfa.check_membership_str(input) {
        println!("  - '{input}' is in the language");
    } else {
        println!("  - '{input}' is not in the language");
    }
}

fn print_history(dfa: &Automaton<String, String>) {
    for transition in dfa.history() {
        println!("  {transition}");
    }
    println!("\nCurrent state: {}", dfa.current());
}

fn main() {
    println!("=== Reference Session ===\n");

    let definition = Arc::new(loader::from_json_str(DEFINITION).unwrap());
    println!("{definition}\n");

    let mut dfa = Automaton::new(Arc::clone(&definition));

    report_run(&mut dfa, "001");

    println!("\n{RULE}");
    println!("History of transitions and current state:");
    print_history(&dfa);

    println!("\n{RULE}");
    println!("Language accepted by the DFA: {:?}", dfa.enumerate_language());
    report_membership(&mut dfa, "001");

    report_run(&mut dfa, "010101");

    println!("\n{RULE}");
    println!("Updated history of transitions and current state:");
    print_history(&dfa);

    println!("\n{RULE}");
    report_membership(&mut dfa, "012");
    if let Err(error @ RunError::SymbolNotInAlphabet { .. }) = dfa.run_str("012") {
        println!("  - Error: {error}");
    }

    report_run(&mut dfa, "000111000");

    println!("\n=== Session Complete ===");
}
