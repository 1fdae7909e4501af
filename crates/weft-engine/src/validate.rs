//! Pure clone-and-transform passes: validation annotation and preview
//! normalization.
//!
//! Unlike the mutation engine, everything here builds a *new* tree and leaves
//! its argument untouched. Callers depend on that: a discarded validation
//! result must leave the designer state fully usable.

use crate::locate::for_each_mut;
use weft_model::{Cell, CellId};

/// Deep-clone `root` with validation warnings recomputed.
///
/// Cells whose `required` flag is set and whose value is empty (see
/// [`CellValue::is_empty`]) get `warnable = true` and a generated message;
/// every other cell is reset to a clean slate. Validation failures are data
/// for the UI to render, never errors.
///
/// [`CellValue::is_empty`]: weft_model::CellValue::is_empty
#[must_use]
pub fn annotate(root: &Cell) -> Cell {
    let mut copy = root.clone();
    for_each_mut(&mut copy, |cell| {
        if cell.required && cell.value.is_empty() {
            cell.warning = format!(
                "{} is required.",
                cell.label.as_deref().unwrap_or(cell.kind.as_str())
            );
            cell.warnable = true;
        } else {
            cell.warnable = false;
            cell.warning.clear();
        }
    });
    copy
}

/// Deep-clone `root` normalized for the preview dialog.
///
/// Every cell gets a fresh id, so previewed instances never collide with the
/// designer's ids, and any cell with a non-empty `default_value` has its
/// value seeded from it (defaults win over stale designer-entered values, as
/// the preview renders the form a fresh respondent would see).
#[must_use]
pub fn preview(root: &Cell) -> Cell {
    let mut copy = root.clone();
    for_each_mut(&mut copy, |cell| {
        cell.id = CellId::generate(&cell.kind);
        if !cell.default_value.is_empty() {
            cell.value = cell.default_value.clone();
        }
    });
    copy
}
