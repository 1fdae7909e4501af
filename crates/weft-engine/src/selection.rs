//! The single globally-active cell.

use serde::{Deserialize, Serialize};
use weft_model::CellId;

/// Tracks which cell is open in the configuration panel.
///
/// Held beside the tree rather than flagged on every node, so "at most one
/// active cell" holds by construction instead of by a full-tree reset pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection(Option<CellId>);

impl Selection {
    /// Nothing selected.
    #[must_use]
    pub fn none() -> Self {
        Self(None)
    }

    /// Make `id` the active cell, replacing any previous selection.
    pub fn activate(&mut self, id: CellId) {
        self.0 = Some(id);
    }

    /// Drop the selection.
    pub fn clear(&mut self) {
        self.0 = None;
    }

    /// The active cell's id, if any.
    #[must_use]
    pub fn current(&self) -> Option<&CellId> {
        self.0.as_ref()
    }

    /// Whether `id` is the active cell.
    #[must_use]
    pub fn is_active(&self, id: &CellId) -> bool {
        self.0.as_ref() == Some(id)
    }
}
