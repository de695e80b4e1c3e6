//! Input events delivered by the host, and double-click detection.

use crate::config::{AnnotatorConfig, DOUBLE_CLICK_DISTANCE, DOUBLE_CLICK_TIME_MS};
use crate::geometry::SurfaceBounds;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::time::Duration;

// Use web_time for WASM compatibility
#[cfg(target_arch = "wasm32")]
use web_time::Instant;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    /// Only the left button draws.
    pub fn is_primary(self) -> bool {
        self == MouseButton::Left
    }
}

/// Keyboard event type. Keys are named the way browsers and winit name
/// them ("Enter", "Escape", "a", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyEvent {
    Pressed(String),
    Released(String),
}

/// What a key press means to the drawing machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Finish the gesture in progress.
    Confirm,
    /// Abandon the gesture in progress.
    Cancel,
}

impl KeyEvent {
    /// Map a key press to an action. Releases and other keys map to `None`.
    pub fn action(&self) -> Option<KeyAction> {
        match self {
            KeyEvent::Pressed(key) => match key.as_str() {
                "Enter" => Some(KeyAction::Confirm),
                "Escape" => Some(KeyAction::Cancel),
                _ => None,
            },
            KeyEvent::Released(_) => None,
        }
    }
}

/// An input event as delivered by the host.
///
/// Pointer positions are raw device coordinates; `surface` is the
/// annotation surface's bounding box sampled when the event fired, or
/// `None` if the surface is not mounted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    PointerDown {
        position: Point,
        button: MouseButton,
        surface: Option<SurfaceBounds>,
    },
    PointerMove {
        position: Point,
        surface: Option<SurfaceBounds>,
    },
    PointerUp {
        position: Point,
        button: MouseButton,
        surface: Option<SurfaceBounds>,
    },
    /// A double click reported by the host toolkit.
    DoubleClick { position: Point },
    Key(KeyEvent),
}

/// Detects a fast second press of the primary button near the first one.
#[derive(Debug, Clone)]
pub struct ClickTracker {
    window: Duration,
    max_distance: f64,
    /// Last click time for double-click detection.
    last_click_time: Option<Instant>,
    /// Last click position for double-click detection.
    last_click_position: Option<Point>,
}

impl Default for ClickTracker {
    fn default() -> Self {
        Self::new(Duration::from_millis(DOUBLE_CLICK_TIME_MS), DOUBLE_CLICK_DISTANCE)
    }
}

impl ClickTracker {
    pub fn new(window: Duration, max_distance: f64) -> Self {
        Self {
            window,
            max_distance,
            last_click_time: None,
            last_click_position: None,
        }
    }

    pub fn from_config(config: &AnnotatorConfig) -> Self {
        Self::new(
            Duration::from_millis(config.double_click_ms),
            config.double_click_distance,
        )
    }

    /// Record a primary press now. Returns true if it completes a double click.
    pub fn register_press(&mut self, position: Point) -> bool {
        self.register_press_at(position, Instant::now())
    }

    /// Record a primary press at a given time.
    pub fn register_press_at(&mut self, position: Point, at: Instant) -> bool {
        if let (Some(last_time), Some(last_pos)) =
            (self.last_click_time, self.last_click_position)
        {
            let elapsed = at.saturating_duration_since(last_time);
            if elapsed < self.window && position.distance(last_pos) < self.max_distance {
                // Reset to prevent triple-click being detected as another double-click
                self.reset();
                return true;
            }
        }
        self.last_click_time = Some(at);
        self.last_click_position = Some(position);
        false
    }

    /// Forget the previous press.
    pub fn reset(&mut self) {
        self.last_click_time = None;
        self.last_click_position = None;
    }
}
