//! The command protocol: discrete user intents consumed by the reducer.
//!
//! Commands serialize internally tagged on `type` with the wire names the
//! gesture layer speaks (`ADD`, `POSITIONED_MOVE`, ...). Unknown tags
//! deserialize to [`Command::Unknown`], which reduces to an unchanged state,
//! keeping the dispatch surface forward-compatible with commands it has not
//! yet learned about.

use serde::{Deserialize, Serialize};
use weft_model::{Cell, CellId, CellValue, DropSide, LaneLocation};

/// A tagged user intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum Command {
    /// Replace the whole tree wholesale. The only command that does not
    /// clone: prior state is discarded entirely.
    Init { data: Cell },
    /// Drop a brand-new cell into a lane (appends).
    Add { drag_item: Cell, location: LaneLocation },
    /// Move an existing cell into a lane (appends).
    Move { id: CellId, location: LaneLocation },
    /// Drop a brand-new cell beside an existing sibling.
    PositionedAdd {
        drag_item: Cell,
        drop_item_id: CellId,
        side: DropSide,
    },
    /// Move an existing cell beside another.
    PositionedMove {
        id: CellId,
        drop_item_id: CellId,
        side: DropSide,
    },
    /// Replace a cell wholesale (configuration-panel edit).
    Update { data: Cell },
    /// Make a cell the active selection.
    Active { id: CellId },
    /// Delete the active cell, if any.
    DeleteActive,
    /// Assign a widget value.
    SetValue { target: CellId, value: CellValue },
    /// Recompute validation warnings into a fresh tree.
    Validate,
    /// Forward-compatibility fallback: any unrecognized tag lands here.
    #[serde(other)]
    Unknown,
}

impl Command {
    /// Stable wire name, used in trace events.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Init { .. } => "INIT",
            Self::Add { .. } => "ADD",
            Self::Move { .. } => "MOVE",
            Self::PositionedAdd { .. } => "POSITIONED_ADD",
            Self::PositionedMove { .. } => "POSITIONED_MOVE",
            Self::Update { .. } => "UPDATE",
            Self::Active { .. } => "ACTIVE",
            Self::DeleteActive => "DELETE_ACTIVE",
            Self::SetValue { .. } => "SET_VALUE",
            Self::Validate => "VALIDATE",
            Self::Unknown => "UNKNOWN",
        }
    }
}
