//! Loading definitions from documents and files.
//!
//! Loaders only marshal data into the five definition components. The
//! resulting candidate always goes through [`Definition::new`], so a loader
//! can never hand out a definition that breaks an invariant.
//!
//! # Example
//!
//! ```rust
//! use dfa_engine::loader;
//!
//! let definition = loader::from_text_str("even odd\n1\neven\neven\neven 1 odd\nodd 1 even\n")
//!     .unwrap();
//! assert_eq!(definition.transition_count(), 2);
//! ```

use crate::core::Definition;
use std::fs;
use std::path::Path;
use tracing::debug;

pub mod error;
pub mod json;
pub mod text;

pub use error::LoadError;
pub use json::DefinitionDocument;

/// Parse a JSON definition document.
pub fn from_json_str(input: &str) -> Result<Definition<String, String>, LoadError> {
    debug!(bytes = input.len(), "loading JSON definition");
    let document: DefinitionDocument = serde_json::from_str(input)?;
    document.into_definition()
}

/// Convert an already-parsed JSON value.
pub fn from_json_value(value: serde_json::Value) -> Result<Definition<String, String>, LoadError> {
    debug!("loading definition from JSON value");
    let document: DefinitionDocument = serde_json::from_value(value)?;
    document.into_definition()
}

/// Parse the line-oriented text format (see [`text`]).
pub fn from_text_str(input: &str) -> Result<Definition<String, String>, LoadError> {
    debug!(bytes = input.len(), "loading text definition");
    text::parse(input)
}

/// Read and parse a JSON document from disk.
pub fn from_json_file(path: impl AsRef<Path>) -> Result<Definition<String, String>, LoadError> {
    from_json_str(&read(path.as_ref())?)
}

/// Read and parse a text-format definition from disk.
pub fn from_text_file(path: impl AsRef<Path>) -> Result<Definition<String, String>, LoadError> {
    from_text_str(&read(path.as_ref())?)
}

/// Load a file, choosing the format by extension: `.json` is a JSON
/// document, anything else the text format.
pub fn from_file(path: impl AsRef<Path>) -> Result<Definition<String, String>, LoadError> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        from_json_file(path)
    } else {
        from_text_file(path)
    }
}

fn read(path: &Path) -> Result<String, LoadError> {
    debug!(path = %path.display(), "reading definition file");
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    const TEXT: &str = "q0 q1 q2\n0 1\nq0\nq2\nq0 0 q1\nq0 1 q0\nq1 0 q2\nq1 1 q0\nq2 0 q2\nq2 1 q2\n";

    fn document() -> serde_json::Value {
        json!({
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
        })
    }

    #[test]
    fn json_and_text_formats_agree() {
        let from_json = from_json_str(&document().to_string()).unwrap();
        let from_value = from_json_value(document()).unwrap();
        let from_text = from_text_str(TEXT).unwrap();

        assert_eq!(from_json, from_text);
        assert_eq!(from_value, from_text);
    }

    #[test]
    fn json_with_unknown_start_is_invalid() {
        let mut value = document();
        value["start_state"] = json!("q9");

        let error = from_json_value(value).unwrap_err();
        assert!(matches!(error, LoadError::Invalid(_)));
    }

    #[test]
    fn json_missing_field_is_a_json_error() {
        let error = from_json_str(r#"{"states": ["q0"]}"#).unwrap_err();
        assert!(matches!(error, LoadError::Json(_)));
    }

    #[test]
    fn from_file_dispatches_on_extension() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("example.json");
        fs::write(&json_path, document().to_string()).unwrap();

        let text_path = dir.path().join("example.dfa");
        let mut file = fs::File::create(&text_path).unwrap();
        file.write_all(TEXT.as_bytes()).unwrap();

        assert_eq!(from_file(&json_path).unwrap(), from_file(&text_path).unwrap());
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        match from_file(&path) {
            Err(LoadError::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("Expected IO error, got {other:?}"),
        }
    }
}
