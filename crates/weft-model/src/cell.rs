//! Cells and lanes: the form tree itself.

use crate::id::CellId;
use crate::value::CellValue;
use serde::{Deserialize, Serialize};

/// One selectable choice for option-carrying widgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
}

impl ChoiceOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// An ordered slot inside a container cell.
///
/// `span` is a relative width weight. The grid convention distributes a
/// 24-unit row across lanes; the list convention uses a single span-100 lane.
/// Lane order within a container is fixed at creation; lane contents are
/// freely edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lane {
    pub span: u16,
    /// Child cells in visual order.
    #[serde(default, rename = "cellDataList")]
    pub cells: Vec<Cell>,
}

impl Lane {
    /// Create an empty lane with the given span weight.
    #[must_use]
    pub fn new(span: u16) -> Self {
        Self {
            span,
            cells: Vec::new(),
        }
    }

    /// Create a lane pre-populated with cells.
    #[must_use]
    pub fn with_cells(span: u16, cells: Vec<Cell>) -> Self {
        Self { span, cells }
    }
}

/// A node in the form tree: a leaf widget, or a container owning lanes.
///
/// Fields that make no sense for a cell's kind stay at their defaults and
/// are omitted from serialized output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    /// Unique id within the tree.
    pub id: CellId,
    /// Open widget-kind tag (`"grid"`, `"input"`, ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Ordered lanes; empty for leaf widgets.
    #[serde(default, skip_serializing_if = "Vec::is_empty", rename = "containers")]
    pub lanes: Vec<Lane>,
    /// Display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Hint text for text-like widgets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Whether validation demands a non-empty value.
    #[serde(default, skip_serializing_if = "is_false")]
    pub required: bool,
    /// Choices for select/checkbox/radio widgets.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ChoiceOption>,
    /// Current value.
    #[serde(default, skip_serializing_if = "CellValue::is_null")]
    pub value: CellValue,
    /// Value seeded into previews when set.
    #[serde(default, skip_serializing_if = "CellValue::is_null")]
    pub default_value: CellValue,
    /// Whether rendered forms grey the widget out.
    #[serde(default, skip_serializing_if = "is_false")]
    pub disabled: bool,
    /// Whether the last validation pass flagged this cell.
    #[serde(default, skip_serializing_if = "is_false")]
    pub warnable: bool,
    /// Message from the last validation pass.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub warning: String,
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

impl Cell {
    /// Create a bare cell of `kind` with a caller-supplied id.
    ///
    /// Prefer [`WidgetRegistry::instantiate`], which fills in kind defaults
    /// and allocates a fresh id.
    ///
    /// [`WidgetRegistry::instantiate`]: crate::registry::WidgetRegistry::instantiate
    #[must_use]
    pub fn new(id: CellId, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
            lanes: Vec::new(),
            label: None,
            placeholder: None,
            required: false,
            options: Vec::new(),
            value: CellValue::Null,
            default_value: CellValue::Null,
            disabled: false,
            warnable: false,
            warning: String::new(),
        }
    }

    /// Whether this cell owns lanes and is therefore traversed into.
    ///
    /// Container capability is decided by the widget descriptor at creation
    /// time and carried structurally here; nothing in the engine matches on
    /// kind tags.
    #[must_use]
    pub fn is_container(&self) -> bool {
        !self.lanes.is_empty()
    }

    /// The canonical empty document: a grid with one full-width lane and the
    /// well-known id `"root"`.
    #[must_use]
    pub fn document_root() -> Self {
        let mut root = Self::new(CellId::new("root"), "grid");
        root.lanes.push(Lane::new(24));
        root
    }

    /// Total number of cells in this subtree, itself included.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        1 + self
            .lanes
            .iter()
            .flat_map(|lane| &lane.cells)
            .map(Cell::cell_count)
            .sum::<usize>()
    }
}
