//! Positional tree surgery.
//!
//! Every operation takes the already-cloned tree and mutates it in place;
//! cloning is the reducer's job. Operations fail fast when a referenced id
//! cannot be located rather than silently doing nothing; call sites assume
//! the gesture layer only references ids currently present in the tree.

use crate::error::EngineError;
use crate::locate::{cell_by_id_mut, locate_by_id, owning_list_mut};
use weft_model::{Cell, CellId, CellValue, DropSide, LaneLocation};

/// Splice `cell` beside the anchor: at the anchor's index (`Before`) or
/// right after it (`After`).
pub fn insert_beside(
    root: &mut Cell,
    cell: Cell,
    anchor_id: &CellId,
    side: DropSide,
) -> Result<(), EngineError> {
    let location = locate_by_id(root, anchor_id)
        .map(|found| found.location)
        .ok_or_else(|| EngineError::CellNotFound(anchor_id.clone()))?;
    #[cfg(feature = "tracing")]
    tracing::trace!(cell = %cell.id, anchor = %anchor_id, ?side, "insert beside");
    let list = owning_list_mut(root, &location.parent_id, location.lane_index)?;
    let at = match side {
        DropSide::Before => location.index,
        DropSide::After => location.index + 1,
    };
    list.insert(at, cell);
    Ok(())
}

/// Detach the cell with `id` and return the subtree.
pub fn remove(root: &mut Cell, id: &CellId) -> Result<Cell, EngineError> {
    let location = locate_by_id(root, id)
        .map(|found| found.location)
        .ok_or_else(|| EngineError::CellNotFound(id.clone()))?;
    #[cfg(feature = "tracing")]
    tracing::trace!(cell = %id, "remove");
    let list = owning_list_mut(root, &location.parent_id, location.lane_index)?;
    Ok(list.remove(location.index))
}

/// Remove + insert beside: the positioned-move gesture.
///
/// The anchor is resolved after removal, so moving a cell relative to itself
/// or to anything inside its own subtree fails with
/// [`EngineError::CellNotFound`].
pub fn move_beside(
    root: &mut Cell,
    id: &CellId,
    anchor_id: &CellId,
    side: DropSide,
) -> Result<(), EngineError> {
    let cell = remove(root, id)?;
    insert_beside(root, cell, anchor_id, side)
}

/// Append `cell` to the end of the addressed lane.
///
/// Plain container drops always land last; only sibling-relative drops are
/// positional. The asymmetry is deliberate.
pub fn append_into(
    root: &mut Cell,
    cell: Cell,
    location: &LaneLocation,
) -> Result<(), EngineError> {
    #[cfg(feature = "tracing")]
    tracing::trace!(
        cell = %cell.id,
        parent = %location.parent_id,
        lane = location.lane_index,
        "append into"
    );
    let list = owning_list_mut(root, &location.parent_id, location.lane_index)?;
    list.push(cell);
    Ok(())
}

/// Detach the cell with `id` and append it to the addressed lane.
///
/// Moving a container into one of its own descendant lanes fails fast: once
/// the subtree is detached the destination no longer resolves, and the
/// reducer discards the half-edited clone.
pub fn move_into(root: &mut Cell, id: &CellId, location: &LaneLocation) -> Result<(), EngineError> {
    let cell = remove(root, id)?;
    append_into(root, cell, location)
}

/// Replace the cell whose id matches `replacement.id` wholesale.
///
/// This is the configuration-panel edit path; the replacement's field shape
/// is taken on faith beyond the id match.
pub fn replace(root: &mut Cell, replacement: Cell) -> Result<(), EngineError> {
    let location = locate_by_id(root, &replacement.id)
        .map(|found| found.location)
        .ok_or_else(|| EngineError::CellNotFound(replacement.id.clone()))?;
    let list = owning_list_mut(root, &location.parent_id, location.lane_index)?;
    list[location.index] = replacement;
    Ok(())
}

/// Assign the value field of the cell with `id` (the root included).
pub fn set_value(root: &mut Cell, id: &CellId, value: CellValue) -> Result<(), EngineError> {
    let cell = cell_by_id_mut(root, id).ok_or_else(|| EngineError::CellNotFound(id.clone()))?;
    cell.value = value;
    Ok(())
}
