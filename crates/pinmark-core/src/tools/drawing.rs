//! The drawing state machine.
//!
//! Each handler is a transition over the active tool (read, not owned) and
//! the in-progress gesture, and reports what happened as an [`Outcome`].
//! A finished gesture yields a [`Commit`] carrying only the shape; ids and
//! labels are assigned by the store.

use super::ToolKind;
use crate::config::AnnotatorConfig;
use crate::geometry::normalize_rectangle;
use crate::shapes::{Polygon, Rectangle, Shape};
use kurbo::Point;

/// In-progress gesture.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum GestureState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Click-drag rectangle.
    Rectangle { anchor: Point, current: Point },
    /// Multi-click polygon. `cursor` is only used for the live preview
    /// segment and is never part of the committed vertices.
    Polygon {
        vertices: Vec<Point>,
        cursor: Option<Point>,
    },
}

impl GestureState {
    /// Whether this gesture belongs to `tool`. Idle belongs to every tool.
    fn belongs_to(&self, tool: ToolKind) -> bool {
        match self {
            GestureState::Idle => true,
            GestureState::Rectangle { .. } => tool == ToolKind::Rectangle,
            GestureState::Polygon { .. } => tool == ToolKind::Polygon,
        }
    }
}

/// A finished gesture, ready to become an annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct Commit {
    pub shape: Shape,
}

/// Render-only shape for the gesture in progress.
#[derive(Debug, Clone, PartialEq)]
pub enum Preview {
    /// Normalized rectangle between anchor and current pointer.
    Rectangle(Rectangle),
    /// Placed vertices and the live cursor.
    Polygon {
        vertices: Vec<Point>,
        cursor: Option<Point>,
    },
}

/// Result of feeding one event to the machine.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The event did not apply.
    None,
    /// A new gesture started.
    Started,
    /// The gesture in progress changed.
    Updated,
    /// A gesture finished and produced a shape.
    Committed(Commit),
    /// A gesture finished below its commit threshold.
    Discarded,
    /// A gesture was abandoned by cancel or tool change.
    Cancelled,
    /// The select tool was clicked at this surface point.
    SelectAt(Point),
}

/// Interprets pointer and keyboard events against the active tool.
#[derive(Debug, Clone)]
pub struct DrawingMachine {
    gesture: GestureState,
    min_rectangle_size: f64,
    min_polygon_vertices: usize,
}

impl Default for DrawingMachine {
    fn default() -> Self {
        Self::new(&AnnotatorConfig::default())
    }
}

impl DrawingMachine {
    pub fn new(config: &AnnotatorConfig) -> Self {
        Self {
            gesture: GestureState::Idle,
            min_rectangle_size: config.min_rectangle_size,
            min_polygon_vertices: config.min_polygon_vertices.max(Polygon::MIN_VERTICES),
        }
    }

    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    /// Check if a gesture is in progress.
    pub fn is_active(&self) -> bool {
        !matches!(self.gesture, GestureState::Idle)
    }

    /// Drop a gesture left over from another tool. Hosts that route tool
    /// changes through [`DrawingMachine::on_tool_changed`] never hit this.
    fn reconcile(&mut self, tool: ToolKind) {
        if !self.gesture.belongs_to(tool) {
            log::warn!("Dropping gesture that does not belong to {:?}", tool);
            self.gesture = GestureState::Idle;
        }
    }

    /// Primary button pressed at a surface-local position.
    pub fn on_primary_down(&mut self, tool: ToolKind, position: Point) -> Outcome {
        self.reconcile(tool);
        match tool {
            ToolKind::Select => {
                if self.is_active() {
                    Outcome::None
                } else {
                    Outcome::SelectAt(position)
                }
            }
            ToolKind::Point => {
                log::debug!("Point committed at ({}, {})", position.x, position.y);
                Outcome::Committed(Commit {
                    shape: Shape::Point(position),
                })
            }
            ToolKind::Rectangle => {
                log::debug!("Rectangle gesture started at ({}, {})", position.x, position.y);
                self.gesture = GestureState::Rectangle {
                    anchor: position,
                    current: position,
                };
                Outcome::Started
            }
            ToolKind::Polygon => match &mut self.gesture {
                GestureState::Polygon { vertices, .. } => {
                    vertices.push(position);
                    Outcome::Updated
                }
                _ => {
                    log::debug!("Polygon gesture started at ({}, {})", position.x, position.y);
                    self.gesture = GestureState::Polygon {
                        vertices: vec![position],
                        cursor: None,
                    };
                    Outcome::Started
                }
            },
        }
    }

    /// Pointer moved to a surface-local position.
    pub fn on_pointer_move(&mut self, tool: ToolKind, position: Point) -> Outcome {
        self.reconcile(tool);
        match &mut self.gesture {
            GestureState::Idle => Outcome::None,
            GestureState::Rectangle { current, .. } => {
                *current = position;
                Outcome::Updated
            }
            GestureState::Polygon { cursor, .. } => {
                *cursor = Some(position);
                Outcome::Updated
            }
        }
    }

    /// Primary button released.
    ///
    /// Ends a rectangle gesture. When the release position is known it
    /// becomes the final corner, otherwise the last pointer position is used.
    pub fn on_primary_up(&mut self, tool: ToolKind, position: Option<Point>) -> Outcome {
        self.reconcile(tool);
        let GestureState::Rectangle { anchor, current } = self.gesture else {
            return Outcome::None;
        };
        self.gesture = GestureState::Idle;

        let rect = normalize_rectangle(anchor, position.unwrap_or(current));
        if rect.exceeds(self.min_rectangle_size) {
            log::debug!(
                "Rectangle committed: {}x{} at ({}, {})",
                rect.width,
                rect.height,
                rect.x,
                rect.y
            );
            Outcome::Committed(Commit {
                shape: Shape::Rectangle(rect),
            })
        } else {
            log::debug!("Rectangle discarded: {}x{} is below minimum", rect.width, rect.height);
            Outcome::Discarded
        }
    }

    /// Secondary trigger (double click). Completes a polygon.
    pub fn on_secondary_trigger(&mut self, tool: ToolKind) -> Outcome {
        self.reconcile(tool);
        self.finish_polygon(tool)
    }

    /// Confirm key (Enter). Completes a polygon.
    pub fn on_confirm_key(&mut self, tool: ToolKind) -> Outcome {
        self.reconcile(tool);
        self.finish_polygon(tool)
    }

    /// Cancel key (Escape). Abandons any gesture, whatever the tool.
    pub fn on_cancel_key(&mut self) -> Outcome {
        self.cancel()
    }

    /// The active tool changed. The previous tool's gesture is abandoned
    /// before the new tool takes effect.
    pub fn on_tool_changed(&mut self, previous: ToolKind, next: ToolKind) -> Outcome {
        if previous == next {
            return Outcome::None;
        }
        self.cancel()
    }

    /// Abandon the current gesture without committing.
    pub fn cancel(&mut self) -> Outcome {
        if !self.is_active() {
            return Outcome::None;
        }
        log::debug!("Gesture cancelled");
        self.gesture = GestureState::Idle;
        Outcome::Cancelled
    }

    fn finish_polygon(&mut self, tool: ToolKind) -> Outcome {
        if tool != ToolKind::Polygon {
            return Outcome::None;
        }
        let GestureState::Polygon { vertices, .. } = std::mem::take(&mut self.gesture) else {
            return Outcome::None;
        };
        if vertices.len() >= self.min_polygon_vertices {
            log::debug!("Polygon committed with {} vertices", vertices.len());
            Outcome::Committed(Commit {
                shape: Shape::Polygon(Polygon::new(vertices)),
            })
        } else {
            log::debug!("Polygon discarded with {} vertices", vertices.len());
            Outcome::Discarded
        }
    }

    /// Get the preview shape for the gesture in progress.
    pub fn preview(&self) -> Option<Preview> {
        match &self.gesture {
            GestureState::Idle => None,
            GestureState::Rectangle { anchor, current } => {
                Some(Preview::Rectangle(normalize_rectangle(*anchor, *current)))
            }
            GestureState::Polygon { vertices, cursor } => Some(Preview::Polygon {
                vertices: vertices.clone(),
                cursor: *cursor,
            }),
        }
    }
}
