//! Widget kind descriptors and the instance factory.

use crate::cell::{Cell, Lane};
use crate::id::CellId;
use rustc_hash::FxHashMap;
use std::fmt;

/// Template describing one widget kind available to the designer.
///
/// The lane-span template doubles as the container capability: a kind whose
/// template is non-empty produces cells that own lanes and are recursed into
/// by the engine. This is the single source of truth for container-ness.
#[derive(Debug, Clone)]
pub struct WidgetDescriptor {
    kind: String,
    label: Option<String>,
    placeholder: Option<String>,
    has_options: bool,
    requirable: bool,
    lane_spans: Vec<u16>,
}

impl WidgetDescriptor {
    /// Describe a leaf widget kind.
    #[must_use]
    pub fn leaf(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            label: None,
            placeholder: None,
            has_options: false,
            requirable: false,
            lane_spans: Vec::new(),
        }
    }

    /// Describe a container kind with the given lane-span template.
    #[must_use]
    pub fn container(kind: impl Into<String>, lane_spans: impl Into<Vec<u16>>) -> Self {
        Self {
            kind: kind.into(),
            label: None,
            placeholder: None,
            has_options: false,
            requirable: false,
            lane_spans: lane_spans.into(),
        }
    }

    /// Set the default label for new instances (builder).
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the default placeholder for new instances (builder).
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Mark instances as carrying an options list (builder).
    #[must_use]
    pub fn with_options(mut self) -> Self {
        self.has_options = true;
        self
    }

    /// Mark instances as supporting the `required` flag (builder).
    #[must_use]
    pub fn requirable(mut self) -> Self {
        self.requirable = true;
        self
    }

    /// The kind tag this descriptor registers.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Whether instances own lanes.
    #[must_use]
    pub fn is_container(&self) -> bool {
        !self.lane_spans.is_empty()
    }

    /// Whether the configuration panel should offer an options editor.
    #[must_use]
    pub fn has_options(&self) -> bool {
        self.has_options
    }

    /// Whether the configuration panel should offer a required toggle.
    #[must_use]
    pub fn is_requirable(&self) -> bool {
        self.requirable
    }

    /// The lane-span template (empty for leaf kinds).
    #[must_use]
    pub fn lane_spans(&self) -> &[u16] {
        &self.lane_spans
    }
}

/// Errors from the widget factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The requested kind has no registered descriptor.
    UnknownKind(String),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKind(kind) => write!(f, "unknown widget kind '{kind}'"),
        }
    }
}

impl std::error::Error for RegistryError {}

/// Registry of widget kinds: the palette's source of truth and the instance
/// factory.
///
/// Adding a new widget kind means registering one descriptor; no tree
/// algorithm changes.
#[derive(Debug, Clone)]
pub struct WidgetRegistry {
    descriptors: FxHashMap<String, WidgetDescriptor>,
    /// Registration order, kept for stable palette listings.
    order: Vec<String>,
}

impl WidgetRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            descriptors: FxHashMap::default(),
            order: Vec::new(),
        }
    }

    /// The built-in palette.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(WidgetDescriptor::container("grid", [12, 12]));
        registry.register(WidgetDescriptor::container("list", [100]).with_label("List"));
        registry.register(
            WidgetDescriptor::leaf("input")
                .with_label("Single-line text")
                .with_placeholder("Enter text")
                .requirable(),
        );
        registry.register(
            WidgetDescriptor::leaf("textarea")
                .with_label("Multi-line text")
                .with_placeholder("Enter text")
                .requirable(),
        );
        registry.register(
            WidgetDescriptor::leaf("select")
                .with_label("Dropdown")
                .with_placeholder("Select an option")
                .with_options()
                .requirable(),
        );
        registry.register(
            WidgetDescriptor::leaf("datetime")
                .with_label("Date & time")
                .with_placeholder("Select a moment")
                .requirable(),
        );
        registry.register(
            WidgetDescriptor::leaf("checkbox")
                .with_label("Multiple choice")
                .with_options()
                .requirable(),
        );
        registry.register(
            WidgetDescriptor::leaf("radio")
                .with_label("Single choice")
                .with_options()
                .requirable(),
        );
        registry.register(WidgetDescriptor::leaf("label").with_label("Label"));
        registry
    }

    /// Register (or replace) a widget kind.
    pub fn register(&mut self, descriptor: WidgetDescriptor) {
        let kind = descriptor.kind.clone();
        if self.descriptors.insert(kind.clone(), descriptor).is_none() {
            self.order.push(kind);
        }
    }

    /// Look up a kind's descriptor.
    #[must_use]
    pub fn get(&self, kind: &str) -> Option<&WidgetDescriptor> {
        self.descriptors.get(kind)
    }

    /// Descriptors in registration order (palette listing).
    pub fn iter(&self) -> impl Iterator<Item = &WidgetDescriptor> {
        self.order
            .iter()
            .filter_map(|kind| self.descriptors.get(kind))
    }

    /// Build a new instance of `kind` with a fresh id and kind defaults.
    ///
    /// The returned cell is complete for its kind and never selected.
    pub fn instantiate(&self, kind: &str) -> Result<Cell, RegistryError> {
        let descriptor = self
            .get(kind)
            .ok_or_else(|| RegistryError::UnknownKind(kind.to_owned()))?;
        let mut cell = Cell::new(CellId::generate(kind), kind);
        cell.label = descriptor.label.clone();
        cell.placeholder = descriptor.placeholder.clone();
        for span in &descriptor.lane_spans {
            cell.lanes.push(Lane::new(*span));
        }
        Ok(cell)
    }
}

impl Default for WidgetRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
