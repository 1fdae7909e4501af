//! The command reducer: one pure entry point mapping a command and the
//! current state to the next state.

use crate::command::Command;
use crate::error::EngineError;
use crate::locate::cell_by_id;
use crate::mutate;
use crate::selection::Selection;
use crate::validate;
use serde::{Deserialize, Serialize};
use weft_model::Cell;

/// The full designer state: the form tree plus the selection beside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignerState {
    root: Cell,
    selection: Selection,
}

impl DesignerState {
    /// Start from the canonical empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::with_root(Cell::document_root())
    }

    /// Adopt an existing tree, nothing selected.
    #[must_use]
    pub fn with_root(root: Cell) -> Self {
        Self {
            root,
            selection: Selection::none(),
        }
    }

    /// The root cell.
    #[must_use]
    pub fn root(&self) -> &Cell {
        &self.root
    }

    /// The selection tracker.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Resolve the active cell against the tree: the surface the
    /// configuration panel renders from.
    #[must_use]
    pub fn active_cell(&self) -> Option<&Cell> {
        self.selection
            .current()
            .and_then(|id| cell_by_id(&self.root, id))
    }

    /// Mutation-safe deep snapshot of the tree, for preview or export.
    #[must_use]
    pub fn snapshot(&self) -> Cell {
        self.root.clone()
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply one command to `state`, returning the next state.
///
/// Every branch except `Init` and `Validate` follows the same template:
/// clone, resolve, mutate the clone, return the clone. Mutations never touch
/// `state` itself, so an `Err` leaves the caller exactly where it was, with
/// no rollback needed.
pub fn reduce(state: &DesignerState, command: Command) -> Result<DesignerState, EngineError> {
    #[cfg(feature = "tracing")]
    tracing::debug!(command = command.name(), "reduce");
    match command {
        Command::Init { data } => Ok(DesignerState::with_root(data)),
        Command::Add { drag_item, location } => {
            let mut next = state.clone();
            let id = drag_item.id.clone();
            mutate::append_into(&mut next.root, drag_item, &location)?;
            next.selection.activate(id);
            Ok(next)
        }
        Command::Move { id, location } => {
            let mut next = state.clone();
            mutate::move_into(&mut next.root, &id, &location)?;
            next.selection.activate(id);
            Ok(next)
        }
        Command::PositionedAdd {
            drag_item,
            drop_item_id,
            side,
        } => {
            let mut next = state.clone();
            let id = drag_item.id.clone();
            mutate::insert_beside(&mut next.root, drag_item, &drop_item_id, side)?;
            next.selection.activate(id);
            Ok(next)
        }
        Command::PositionedMove {
            id,
            drop_item_id,
            side,
        } => {
            let mut next = state.clone();
            mutate::move_beside(&mut next.root, &id, &drop_item_id, side)?;
            next.selection.activate(id);
            Ok(next)
        }
        Command::Update { data } => {
            let mut next = state.clone();
            mutate::replace(&mut next.root, data)?;
            Ok(next)
        }
        Command::Active { id } => {
            let mut next = state.clone();
            if cell_by_id(&next.root, &id).is_none() {
                return Err(EngineError::CellNotFound(id));
            }
            next.selection.activate(id);
            Ok(next)
        }
        Command::DeleteActive => {
            let mut next = state.clone();
            let Some(active) = next.selection.current().cloned() else {
                // nothing selected: a clean no-op on a fresh clone
                return Ok(next);
            };
            if active == next.root.id {
                // the document root occupies no lane slot and cannot be deleted
                return Ok(next);
            }
            mutate::remove(&mut next.root, &active)?;
            next.selection.clear();
            Ok(next)
        }
        Command::SetValue { target, value } => {
            let mut next = state.clone();
            mutate::set_value(&mut next.root, &target, value)?;
            Ok(next)
        }
        Command::Validate => {
            let mut next = state.clone();
            next.root = validate::annotate(&state.root);
            Ok(next)
        }
        Command::Unknown => Ok(state.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weft_model::{CellId, CellValue, DropSide, LaneLocation, WidgetRegistry};

    fn named(registry: &WidgetRegistry, kind: &str, id: &str) -> Cell {
        let mut cell = registry.instantiate(kind).unwrap();
        cell.id = CellId::new(id);
        cell
    }

    fn root_lane(parent: &str) -> LaneLocation {
        LaneLocation::lane(CellId::new(parent), 0)
    }

    /// State with root lane = [a, b].
    fn seeded() -> (DesignerState, WidgetRegistry) {
        let registry = WidgetRegistry::builtin();
        let mut root = Cell::document_root();
        root.lanes[0].cells = vec![named(&registry, "input", "a"), named(&registry, "input", "b")];
        (DesignerState::with_root(root), registry)
    }

    fn lane_ids(state: &DesignerState) -> Vec<String> {
        state.root().lanes[0]
            .cells
            .iter()
            .map(|cell| cell.id.as_str().to_owned())
            .collect()
    }

    #[test]
    fn add_appends_and_selects() {
        let (state, registry) = seeded();
        let c = named(&registry, "input", "c");
        let next = reduce(
            &state,
            Command::Add {
                drag_item: c,
                location: root_lane("root"),
            },
        )
        .unwrap();
        assert_eq!(lane_ids(&next), ["a", "b", "c"]);
        assert!(next.selection().is_active(&CellId::new("c")));
        // the input state is untouched
        assert_eq!(lane_ids(&state), ["a", "b"]);
        assert_eq!(state.selection().current(), None);
    }

    #[test]
    fn positioned_add_before_splices_at_the_anchor() {
        let (state, registry) = seeded();
        let next = reduce(
            &state,
            Command::PositionedAdd {
                drag_item: named(&registry, "input", "c"),
                drop_item_id: CellId::new("b"),
                side: DropSide::Before,
            },
        )
        .unwrap();
        assert_eq!(lane_ids(&next), ["a", "c", "b"]);
        assert!(next.selection().is_active(&CellId::new("c")));
    }

    #[test]
    fn positioned_add_after_splices_past_the_anchor() {
        let (state, registry) = seeded();
        let next = reduce(
            &state,
            Command::PositionedAdd {
                drag_item: named(&registry, "input", "c"),
                drop_item_id: CellId::new("a"),
                side: DropSide::After,
            },
        )
        .unwrap();
        assert_eq!(lane_ids(&next), ["a", "c", "b"]);
    }

    #[test]
    fn positioned_move_round_trip() {
        let (state, _) = seeded();
        let moved = reduce(
            &state,
            Command::PositionedMove {
                id: CellId::new("b"),
                drop_item_id: CellId::new("a"),
                side: DropSide::Before,
            },
        )
        .unwrap();
        assert_eq!(lane_ids(&moved), ["b", "a"]);

        let back = reduce(
            &moved,
            Command::PositionedMove {
                id: CellId::new("b"),
                drop_item_id: CellId::new("a"),
                side: DropSide::After,
            },
        )
        .unwrap();
        assert_eq!(lane_ids(&back), ["a", "b"]);
    }

    #[test]
    fn delete_active_removes_then_no_ops() {
        let (state, _) = seeded();
        let selected = reduce(&state, Command::Active { id: CellId::new("a") }).unwrap();
        let deleted = reduce(&selected, Command::DeleteActive).unwrap();
        assert_eq!(lane_ids(&deleted), ["b"]);
        assert_eq!(deleted.selection().current(), None);

        let again = reduce(&deleted, Command::DeleteActive).unwrap();
        assert_eq!(again, deleted);
    }

    #[test]
    fn delete_active_spares_the_document_root() {
        let (state, _) = seeded();
        let selected = reduce(&state, Command::Active { id: CellId::new("root") }).unwrap();
        let after = reduce(&selected, Command::DeleteActive).unwrap();
        assert_eq!(lane_ids(&after), ["a", "b"]);
    }

    #[test]
    fn active_requires_a_live_id() {
        let (state, _) = seeded();
        assert_eq!(
            reduce(&state, Command::Active { id: CellId::new("ghost") }).unwrap_err(),
            EngineError::CellNotFound(CellId::new("ghost"))
        );
        // the failed dispatch left the caller's state usable
        assert!(reduce(&state, Command::Active { id: CellId::new("a") }).is_ok());
    }

    #[test]
    fn update_replaces_by_id() {
        let (state, registry) = seeded();
        let mut edited = named(&registry, "input", "b");
        edited.label = Some("Email".into());
        let next = reduce(&state, Command::Update { data: edited }).unwrap();
        assert_eq!(
            next.root().lanes[0].cells[1].label.as_deref(),
            Some("Email")
        );
        assert_eq!(state.root().lanes[0].cells[1].label.as_deref(), Some("Single-line text"));
    }

    #[test]
    fn set_value_then_validate_clears_warnings() {
        let (state, _) = seeded();
        let mut required = state.clone();
        // make "a" required via UPDATE
        let mut edited = required.root().lanes[0].cells[0].clone();
        edited.required = true;
        required = reduce(&required, Command::Update { data: edited }).unwrap();

        let checked = reduce(&required, Command::Validate).unwrap();
        assert!(checked.root().lanes[0].cells[0].warnable);

        let filled = reduce(
            &required,
            Command::SetValue {
                target: CellId::new("a"),
                value: CellValue::text("yes"),
            },
        )
        .unwrap();
        let rechecked = reduce(&filled, Command::Validate).unwrap();
        assert!(!rechecked.root().lanes[0].cells[0].warnable);
    }

    #[test]
    fn validate_is_pure_at_the_command_level() {
        let (state, _) = seeded();
        let before = state.clone();
        let first = reduce(&state, Command::Validate).unwrap();
        let second = reduce(&state, Command::Validate).unwrap();
        assert_eq!(first, second);
        assert_eq!(state, before);
    }

    #[test]
    fn init_replaces_wholesale_and_clears_selection() {
        let (state, _) = seeded();
        let selected = reduce(&state, Command::Active { id: CellId::new("a") }).unwrap();
        let next = reduce(
            &selected,
            Command::Init {
                data: Cell::document_root(),
            },
        )
        .unwrap();
        assert_eq!(next.root().cell_count(), 1);
        assert_eq!(next.selection().current(), None);
    }

    #[test]
    fn unknown_commands_are_identity() {
        let (state, _) = seeded();
        let next = reduce(&state, Command::Unknown).unwrap();
        assert_eq!(next, state);
    }

    #[test]
    fn failed_moves_leave_no_partial_edits() {
        let (state, registry) = seeded();
        // nest a grid inside the root, then try to move it into itself
        let next = reduce(
            &state,
            Command::Add {
                drag_item: named(&registry, "grid", "g"),
                location: root_lane("root"),
            },
        )
        .unwrap();
        let err = reduce(
            &next,
            Command::Move {
                id: CellId::new("g"),
                location: LaneLocation::lane(CellId::new("g"), 0),
            },
        )
        .unwrap_err();
        assert_eq!(err, EngineError::ContainerNotFound(CellId::new("g")));
        // "g" is still where it was
        assert_eq!(lane_ids(&next), ["a", "b", "g"]);
    }
}
