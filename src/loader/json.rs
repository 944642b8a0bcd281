//! Structured (JSON) definition documents.

use super::error::LoadError;
use crate::core::Definition;
use serde::{Deserialize, Serialize};

/// The on-disk shape of a definition.
///
/// ```json
/// {
///     "states": ["q0", "q1"],
///     "alphabet": ["0", "1"],
///     "transition_function": [["q0", "0", "q1"], ["q1", "1", "q0"]],
///     "start_state": "q0",
///     "accept_states": ["q1"]
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionDocument {
    pub states: Vec<String>,
    pub alphabet: Vec<String>,
    pub transition_function: Vec<(String, String, String)>,
    pub start_state: String,
    pub accept_states: Vec<String>,
}

impl DefinitionDocument {
    /// Validate the document into a definition.
    pub fn into_definition(self) -> Result<Definition<String, String>, LoadError> {
        let definition = Definition::new(
            self.states,
            self.alphabet,
            self.transition_function,
            self.start_state,
            self.accept_states,
        )?;
        Ok(definition)
    }

    /// Describe an existing definition as a document.
    pub fn from_definition(definition: &Definition<String, String>) -> Self {
        Self {
            states: definition.states().iter().cloned().collect(),
            alphabet: definition.alphabet().iter().cloned().collect(),
            transition_function: definition
                .transitions()
                .map(|(from, symbol, to)| (from.clone(), symbol.clone(), to.clone()))
                .collect(),
            start_state: definition.start().clone(),
            accept_states: definition.accept_states().iter().cloned().collect(),
        }
    }

    /// Pretty-printed JSON, readable by [`from_json_str`](super::from_json_str).
    pub fn to_json(&self) -> Result<String, LoadError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r#"{
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
    }"#;

    #[test]
    fn document_parses_into_definition() {
        let document: DefinitionDocument = serde_json::from_str(DOCUMENT).unwrap();
        let definition = document.into_definition().unwrap();

        assert_eq!(definition.transition_count(), 6);
        assert_eq!(definition.start(), "q0");
    }

    #[test]
    fn document_mirrors_definition() {
        let document: DefinitionDocument = serde_json::from_str(DOCUMENT).unwrap();
        let definition = document.clone().into_definition().unwrap();

        let described = DefinitionDocument::from_definition(&definition);
        assert_eq!(described.states, document.states);
        assert_eq!(described.accept_states, document.accept_states);
        assert_eq!(described.transition_function.len(), 6);

        let reloaded = described.into_definition().unwrap();
        assert_eq!(reloaded, definition);
    }

    #[test]
    fn transition_must_be_a_triple() {
        let broken = DOCUMENT.replace(r#"["q0", "0", "q1"]"#, r#"["q0", "0"]"#);
        let result: Result<DefinitionDocument, _> = serde_json::from_str(&broken);
        assert!(result.is_err());
    }
}
