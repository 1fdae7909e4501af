#![forbid(unsafe_code)]

//! Weft public facade crate.
//!
//! Re-exports the stable surface of the form-designer core and offers a
//! lightweight prelude for day-to-day usage.
//!
//! ```
//! use weft::prelude::*;
//!
//! let registry = WidgetRegistry::builtin();
//! let state = DesignerState::new();
//!
//! let input = registry.instantiate("input").unwrap();
//! let state = reduce(
//!     &state,
//!     Command::Add {
//!         drag_item: input,
//!         location: LaneLocation::lane(state.root().id.clone(), 0),
//!     },
//! )
//! .unwrap();
//!
//! assert!(state.active_cell().is_some());
//! ```

// --- Model re-exports ------------------------------------------------------

pub use weft_model::{
    Cell, CellId, CellValue, ChoiceOption, DropSide, Lane, LaneLocation, RegistryError,
    WidgetDescriptor, WidgetRegistry,
};

// --- Engine re-exports -----------------------------------------------------

pub use weft_engine::{
    Command, DesignerState, EngineError, Found, Selection, TreeIssue, annotate, cell_by_id,
    cell_by_id_mut, collect_values, for_each, for_each_mut, locate, locate_by_id, owning_list,
    owning_list_mut, preview, reduce, tree_issues,
};

/// Everything a designer frontend typically needs.
pub mod prelude {
    pub use weft_engine::{
        Command, DesignerState, EngineError, Selection, annotate, cell_by_id, collect_values,
        locate, locate_by_id, preview, reduce,
    };
    pub use weft_model::{
        Cell, CellId, CellValue, ChoiceOption, DropSide, Lane, LaneLocation, WidgetDescriptor,
        WidgetRegistry,
    };
}
