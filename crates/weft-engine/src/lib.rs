#![forbid(unsafe_code)]

//! Tree-editing engine for the Weft form designer.
//!
//! The engine owns everything between a decoded drop gesture and the next
//! immutable state snapshot: read-only search ([`locate`](mod@locate)),
//! positional mutation ([`mutate`]), pure validation and preview passes
//! ([`validate`](mod@validate)), the selection tracker, and the
//! [`reduce`](fn@reduce) entry point that ties them together.
//!
//! Control flow per gesture: the UI layer translates a drop event into a
//! [`Command`], the reducer clones the current [`DesignerState`], resolves
//! source and target slots, applies the edit to the clone, updates the
//! selection, and returns the clone as the new state. The input state is
//! never mutated; two snapshots never share structure.
//!
//! # Failure modes
//!
//! - **Stale id**: a gesture references a cell no longer in the tree. Engine
//!   operations fail fast with [`EngineError`] instead of silently no-opping,
//!   so UI-layer bugs surface during testing. Because edits run on a private
//!   clone, an error leaves the caller's state untouched.
//! - **Unknown command tag**: not an error. Decodes to [`Command::Unknown`]
//!   and reduces to an unchanged state (forward compatibility).

pub mod audit;
pub mod command;
pub mod error;
pub mod locate;
pub mod mutate;
pub mod reduce;
pub mod selection;
pub mod validate;

pub use audit::{TreeIssue, tree_issues};
pub use command::Command;
pub use error::EngineError;
pub use locate::{
    Found, cell_by_id, cell_by_id_mut, collect_values, for_each, for_each_mut, locate,
    locate_by_id, owning_list, owning_list_mut,
};
pub use reduce::{DesignerState, reduce};
pub use selection::Selection;
pub use validate::{annotate, preview};
