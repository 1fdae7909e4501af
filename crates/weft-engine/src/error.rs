//! Engine errors.

use std::fmt;
use weft_model::CellId;

/// Precondition failures from locate/mutate operations.
///
/// A missing id means the caller referenced a cell that is not in the tree:
/// a gesture-layer bug, not a recoverable condition. The reducer works on a
/// private clone, so an error never leaves partial edits behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// No cell with this id exists in the tree.
    CellNotFound(CellId),
    /// No container cell with this id exists in the tree.
    ContainerNotFound(CellId),
    /// The container exists but owns fewer lanes.
    LaneOutOfBounds {
        container: CellId,
        lane: usize,
        lanes: usize,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CellNotFound(id) => write!(f, "cell '{id}' not found"),
            Self::ContainerNotFound(id) => write!(f, "container '{id}' not found"),
            Self::LaneOutOfBounds {
                container,
                lane,
                lanes,
            } => write!(
                f,
                "lane {lane} out of bounds for container '{container}' ({lanes} lanes)"
            ),
        }
    }
}

impl std::error::Error for EngineError {}
