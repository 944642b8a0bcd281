//! Line-oriented text definitions.
//!
//! ```text
//! q0 q1 q2        <- states
//! 0 1             <- alphabet
//! q0              <- start state
//! q2              <- accept states (may be empty)
//! q0 0 q1         <- one transition per remaining line
//! q1 0 q2
//! ```
//!
//! Blank lines after the header are ignored.

use super::error::LoadError;
use crate::core::Definition;

fn tokens(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

pub(crate) fn parse(input: &str) -> Result<Definition<String, String>, LoadError> {
    let mut lines = input.lines();
    let mut header = |line: usize, what: &str| {
        lines.next().ok_or_else(|| LoadError::Malformed {
            line,
            reason: format!("missing {what} line"),
        })
    };

    let states = tokens(header(1, "states")?);
    let alphabet = tokens(header(2, "alphabet")?);
    let start_line = tokens(header(3, "start state")?);
    let accept = tokens(header(4, "accept states")?);

    let start = match start_line.as_slice() {
        [start] => start.clone(),
        other => {
            return Err(LoadError::Malformed {
                line: 3,
                reason: format!("expected exactly one start state, found {}", other.len()),
            })
        }
    };

    let mut transitions = Vec::new();
    for (index, line) in lines.enumerate() {
        let line_number = index + 5;
        match tokens(line).as_slice() {
            [] => continue,
            [from, symbol, to] => transitions.push((from.clone(), symbol.clone(), to.clone())),
            other => {
                return Err(LoadError::Malformed {
                    line: line_number,
                    reason: format!(
                        "expected 'state symbol next_state', found {} fields",
                        other.len()
                    ),
                })
            }
        }
    }

    let definition = Definition::new(states, alphabet, transitions, start, accept)?;
    Ok(definition)
}
