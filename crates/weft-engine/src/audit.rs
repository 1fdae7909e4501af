//! Structural diagnostics over a cell tree.

use crate::locate::for_each;
use rustc_hash::FxHashSet;
use std::fmt;
use weft_model::{Cell, CellId};

/// One structural finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeIssue {
    /// The same id appears on more than one cell.
    DuplicateId(CellId),
    /// A container cell owns a lane with a zero span weight.
    ZeroSpanLane { container: CellId, lane: usize },
}

impl fmt::Display for TreeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "duplicate cell id '{id}'"),
            Self::ZeroSpanLane { container, lane } => {
                write!(f, "lane {lane} of container '{container}' has zero span")
            }
        }
    }
}

/// Scan the tree for structural invariant violations.
///
/// Editing through the reducer cannot produce findings; this exists to vet
/// foreign trees handed to `INIT` and as a test oracle.
#[must_use]
pub fn tree_issues(root: &Cell) -> Vec<TreeIssue> {
    let mut seen = FxHashSet::default();
    let mut issues = Vec::new();
    for_each(root, |cell| {
        if !seen.insert(cell.id.clone()) {
            issues.push(TreeIssue::DuplicateId(cell.id.clone()));
        }
        for (lane, template) in cell.lanes.iter().enumerate() {
            if template.span == 0 {
                issues.push(TreeIssue::ZeroSpanLane {
                    container: cell.id.clone(),
                    lane,
                });
            }
        }
    });
    issues
}
