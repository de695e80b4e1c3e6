//! Tool system for the annotation surface.

mod drawing;

pub use drawing::{Commit, DrawingMachine, GestureState, Outcome, Preview};

use crate::shapes::ShapeKind;
use serde::{Deserialize, Serialize};

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    Select,
    #[default]
    Rectangle,
    Point,
    Polygon,
}

impl ToolKind {
    /// Kind of shape this tool draws, `None` for the select tool.
    pub fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            ToolKind::Select => None,
            ToolKind::Rectangle => Some(ShapeKind::Rectangle),
            ToolKind::Point => Some(ShapeKind::Point),
            ToolKind::Polygon => Some(ShapeKind::Polygon),
        }
    }

    /// Get display name for this tool.
    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Select => "Select",
            ToolKind::Rectangle => "Rectangle",
            ToolKind::Point => "Point",
            ToolKind::Polygon => "Polygon",
        }
    }
}

/// A change of the active tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolChange {
    pub previous: ToolKind,
    pub next: ToolKind,
}

/// Holds the single active tool.
#[derive(Debug, Clone, Default)]
pub struct ToolSelector {
    current: ToolKind,
}

impl ToolSelector {
    pub fn new(initial: ToolKind) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> ToolKind {
        self.current
    }

    /// Set the active tool.
    ///
    /// Returns the change so the caller can cancel the previous tool's
    /// gesture, or `None` when `tool` is already active.
    pub fn set(&mut self, tool: ToolKind) -> Option<ToolChange> {
        if self.current == tool {
            return None;
        }
        let change = ToolChange {
            previous: self.current,
            next: tool,
        };
        self.current = tool;
        Some(change)
    }
}
