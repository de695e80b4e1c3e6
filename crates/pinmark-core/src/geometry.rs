//! Coordinate conversion between device space and the annotation surface.

use crate::shapes::Rectangle;
use kurbo::{Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Bounding box of the annotation surface in device coordinates.
///
/// Hosts must sample this at the moment an event is delivered, since the
/// surface can move with layout and scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceBounds {
    /// Top-left corner of the surface in device space.
    pub origin: Point,
    /// Size of the surface.
    pub size: Size,
}

impl SurfaceBounds {
    /// Create bounds from an origin and a size.
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Create bounds from a device-space rectangle.
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            origin: rect.origin(),
            size: rect.size(),
        }
    }

    /// The bounds as a device-space rectangle.
    pub fn as_rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }

    /// Whether a device-space position falls on the surface.
    pub fn contains(&self, raw: Point) -> bool {
        self.as_rect().contains(raw)
    }
}

/// Project a raw device position into surface-local coordinates.
///
/// Returns `None` when the surface has no bounds (not mounted yet).
pub fn to_local_position(raw: Point, surface: Option<SurfaceBounds>) -> Option<Point> {
    let surface = surface?;
    Some(raw - Vec2::new(surface.origin.x, surface.origin.y))
}

/// Build the canonical rectangle spanned by two corners.
///
/// The result is the same whichever corner the drag started from.
pub fn normalize_rectangle(a: Point, b: Point) -> Rectangle {
    Rectangle::new(
        a.x.min(b.x),
        a.y.min(b.y),
        (a.x - b.x).abs(),
        (a.y - b.y).abs(),
    )
}
