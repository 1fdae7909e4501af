//! Cell identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Stable identifier for a cell within a form tree.
///
/// Ids are unique across the whole tree and never reused after deletion
/// within a session. Generated ids are `"<kind>-<serial>"`; callers loading
/// persisted trees supply their own.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CellId(String);

static NEXT_SERIAL: AtomicU64 = AtomicU64::new(1);

impl CellId {
    /// Wrap a caller-supplied id verbatim.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Allocate a fresh id for an instance of `kind`.
    ///
    /// Serials come from a process-wide monotonic counter, so two instances
    /// created back-to-back can never collide.
    #[must_use]
    pub fn generate(kind: &str) -> Self {
        let serial = NEXT_SERIAL.fetch_add(1, Ordering::Relaxed);
        Self(format!("{kind}-{serial}"))
    }

    /// View the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CellId {
    fn from(raw: &str) -> Self {
        Self(raw.to_owned())
    }
}

impl From<String> for CellId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        let a = CellId::generate("input");
        let b = CellId::generate("input");
        assert_ne!(a, b);
    }

    #[test]
    fn generated_ids_embed_the_kind() {
        let id = CellId::generate("select");
        assert!(id.as_str().starts_with("select-"));
    }

    #[test]
    fn caller_supplied_ids_pass_through() {
        let id = CellId::new("root");
        assert_eq!(id.as_str(), "root");
        assert_eq!(id.to_string(), "root");
    }
}
