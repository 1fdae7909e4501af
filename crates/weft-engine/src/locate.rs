//! Read-only tree search.
//!
//! Traversal order is deterministic everywhere: lanes in sequence order,
//! cells within a lane in list order, recursion depth-first immediately
//! after the cell itself is visited (pre-order). Leaf widgets are never
//! recursed into; container capability is carried by the cell (see
//! [`Cell::is_container`]), not by kind-tag comparisons.

use crate::error::EngineError;
use weft_model::{Cell, CellId, CellValue, LaneLocation};

/// A successful locate: where the cell sits, and the cell itself.
#[derive(Debug)]
pub struct Found<'a> {
    /// Address of the slot the cell occupies.
    pub location: LaneLocation,
    /// The located cell.
    pub cell: &'a Cell,
}

/// Find the first cell matching `predicate`, depth-first pre-order.
///
/// The root itself is not a candidate: it occupies no slot. Returns `None`
/// when nothing matches; call sites that assume existence should treat that
/// as a precondition violation.
pub fn locate<'a, P>(root: &'a Cell, mut predicate: P) -> Option<Found<'a>>
where
    P: FnMut(&Cell) -> bool,
{
    fn walk<'a>(
        container: &'a Cell,
        predicate: &mut dyn FnMut(&Cell) -> bool,
    ) -> Option<Found<'a>> {
        for (lane_index, lane) in container.lanes.iter().enumerate() {
            for (index, cell) in lane.cells.iter().enumerate() {
                if predicate(cell) {
                    return Some(Found {
                        location: LaneLocation {
                            parent_id: container.id.clone(),
                            lane_index,
                            index,
                        },
                        cell,
                    });
                }
                if cell.is_container()
                    && let Some(found) = walk(cell, predicate)
                {
                    return Some(found);
                }
            }
        }
        None
    }
    walk(root, &mut predicate)
}

/// Find the slot of the cell with `id`.
pub fn locate_by_id<'a>(root: &'a Cell, id: &CellId) -> Option<Found<'a>> {
    locate(root, |cell| cell.id == *id)
}

/// Shared access to the cell with `id`, the root included.
pub fn cell_by_id<'a>(root: &'a Cell, id: &CellId) -> Option<&'a Cell> {
    if root.id == *id {
        return Some(root);
    }
    for lane in &root.lanes {
        for cell in &lane.cells {
            if let Some(found) = cell_by_id(cell, id) {
                return Some(found);
            }
        }
    }
    None
}

/// Mutable access to the cell with `id`, the root included.
pub fn cell_by_id_mut<'a>(root: &'a mut Cell, id: &CellId) -> Option<&'a mut Cell> {
    if root.id == *id {
        return Some(root);
    }
    for lane in &mut root.lanes {
        for cell in &mut lane.cells {
            if let Some(found) = cell_by_id_mut(cell, id) {
                return Some(found);
            }
        }
    }
    None
}

/// Resolve the cell list of lane `lane_index` under container `parent_id`.
pub fn owning_list<'a>(
    root: &'a Cell,
    parent_id: &CellId,
    lane_index: usize,
) -> Result<&'a [Cell], EngineError> {
    let container = match cell_by_id(root, parent_id) {
        Some(cell) if cell.is_container() => cell,
        _ => return Err(EngineError::ContainerNotFound(parent_id.clone())),
    };
    let lanes = container.lanes.len();
    match container.lanes.get(lane_index) {
        Some(lane) => Ok(&lane.cells),
        None => Err(EngineError::LaneOutOfBounds {
            container: parent_id.clone(),
            lane: lane_index,
            lanes,
        }),
    }
}

/// Mutable variant of [`owning_list`]: the exact list a mutation must splice.
pub fn owning_list_mut<'a>(
    root: &'a mut Cell,
    parent_id: &CellId,
    lane_index: usize,
) -> Result<&'a mut Vec<Cell>, EngineError> {
    let container = match cell_by_id_mut(root, parent_id) {
        Some(cell) if cell.is_container() => cell,
        _ => return Err(EngineError::ContainerNotFound(parent_id.clone())),
    };
    let lanes = container.lanes.len();
    match container.lanes.get_mut(lane_index) {
        Some(lane) => Ok(&mut lane.cells),
        None => Err(EngineError::LaneOutOfBounds {
            container: parent_id.clone(),
            lane: lane_index,
            lanes,
        }),
    }
}

/// Visit every cell depth-first pre-order, the root first.
pub fn for_each<F>(root: &Cell, mut f: F)
where
    F: FnMut(&Cell),
{
    fn walk(cell: &Cell, f: &mut dyn FnMut(&Cell)) {
        f(cell);
        for lane in &cell.lanes {
            for child in &lane.cells {
                walk(child, f);
            }
        }
    }
    walk(root, &mut f);
}

/// Mutable variant of [`for_each`], used by the clone-and-transform passes.
pub fn for_each_mut<F>(root: &mut Cell, mut f: F)
where
    F: FnMut(&mut Cell),
{
    fn walk(cell: &mut Cell, f: &mut dyn FnMut(&mut Cell)) {
        f(cell);
        for lane in &mut cell.lanes {
            for child in &mut lane.cells {
                walk(child, f);
            }
        }
    }
    walk(root, &mut f);
}

/// Collect `(id, value)` for every leaf widget holding a value, in traversal
/// order. This is the "Save" surface of the rendered form.
#[must_use]
pub fn collect_values(root: &Cell) -> Vec<(CellId, CellValue)> {
    let mut values = Vec::new();
    for_each(root, |cell| {
        if !cell.is_container() && !cell.value.is_null() {
            values.push((cell.id.clone(), cell.value.clone()));
        }
    });
    values
}
