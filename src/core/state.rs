//! State and symbol traits for automaton definitions.
//!
//! States and symbols are opaque identifiers. The engine only compares,
//! orders and hashes them, and asks for their textual name when rendering
//! errors, history entries or enumerated strings.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for automaton states.
///
/// States must be totally ordered so that definitions iterate them in a
/// deterministic order.
///
/// # Example
///
/// ```rust
/// use dfa_engine::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
/// enum Parity {
///     Even,
///     Odd,
/// }
///
/// impl State for Parity {
///     fn name(&self) -> &str {
///         match self {
///             Self::Even => "Even",
///             Self::Odd => "Odd",
///         }
///     }
/// }
///
/// assert_eq!(Parity::Odd.name(), "Odd");
/// ```
pub trait State:
    Clone + Eq + Ord + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

/// Trait for input symbols.
///
/// `name` is the text a symbol contributes when accepted inputs are
/// rendered as strings during language enumeration.
pub trait Symbol:
    Clone + Eq + Ord + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the symbol's text.
    fn name(&self) -> &str;
}

impl State for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

impl Symbol for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}
