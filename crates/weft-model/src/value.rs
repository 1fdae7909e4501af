//! Widget values.

use serde::{Deserialize, Serialize};

/// The value a leaf widget currently holds.
///
/// Serialized untagged so exports keep the natural JSON shapes: `"text"`,
/// `42`, `true`, `["a", "b"]`, or `null` when unset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Nothing entered yet.
    #[default]
    Null,
    /// Single checkbox / toggle state.
    Flag(bool),
    /// Numeric input.
    Number(f64),
    /// Free text, a single choice, or a datetime rendered as text.
    Text(String),
    /// Multi-select values (checkbox groups).
    Many(Vec<String>),
}

impl CellValue {
    /// Convenience constructor for text values.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Whether the value is the unset sentinel.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Emptiness as seen by `required` validation.
    ///
    /// `Null`, empty text, an empty selection list, and an unchecked flag
    /// count as empty. Numbers never do: `0` is a legitimate answer.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Flag(checked) => !checked,
            Self::Number(_) => false,
            Self::Text(text) => text.is_empty(),
            Self::Many(items) => items.is_empty(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}
