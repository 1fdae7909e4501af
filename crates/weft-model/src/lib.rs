#![forbid(unsafe_code)]

//! Data model for the Weft form designer.
//!
//! A form layout is an owned tree of [`Cell`]s. Container cells own ordered
//! [`Lane`]s (weighted column slots), and lanes own child cells, recursively.
//! Leaf cells are the input widgets themselves. The [`WidgetRegistry`]
//! describes every widget kind available to the palette and doubles as the
//! instance factory.
//!
//! The model is plain owned data: no interior mutability, no sharing between
//! snapshots. Cloning a [`Cell`] clones the whole subtree, which is exactly
//! what the editing engine's snapshot discipline relies on.

pub mod cell;
pub mod id;
pub mod location;
pub mod registry;
pub mod value;

pub use cell::{Cell, ChoiceOption, Lane};
pub use id::CellId;
pub use location::{DropSide, LaneLocation};
pub use registry::{RegistryError, WidgetDescriptor, WidgetRegistry};
pub use value::CellValue;
