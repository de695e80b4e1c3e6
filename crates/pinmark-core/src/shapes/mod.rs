//! Shape definitions for annotations.

mod polygon;
mod rectangle;

pub use polygon::Polygon;
pub use rectangle::Rectangle;

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Half-size of the center box of a point's crosshair glyph.
pub const CROSSHAIR_BOX: f64 = 4.0;
/// Length of each crosshair arm, measured from the center box edge.
pub const CROSSHAIR_ARM: f64 = 12.0;

/// Kind of a shape, matching the drawing tools that produce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Point,
    Polygon,
}

impl ShapeKind {
    /// Lowercase name used in labels and logs.
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Point => "point",
            ShapeKind::Polygon => "polygon",
        }
    }
}

/// The geometry of an annotation, tagged by its kind.
///
/// Serialized as `{"type": ..., "shape": ...}`. A record tagged with a type
/// this version does not know, and no shape payload, deserializes to
/// [`Shape::Unknown`], which renders as nothing and never hit-tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "shape", rename_all = "lowercase")]
pub enum Shape {
    Rectangle(Rectangle),
    Point(Point),
    Polygon(Polygon),
    #[serde(other)]
    Unknown,
}

impl Shape {
    pub fn kind(&self) -> Option<ShapeKind> {
        match self {
            Shape::Rectangle(_) => Some(ShapeKind::Rectangle),
            Shape::Point(_) => Some(ShapeKind::Point),
            Shape::Polygon(_) => Some(ShapeKind::Polygon),
            Shape::Unknown => None,
        }
    }

    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        match self {
            Shape::Rectangle(r) => r.hit_test(point, tolerance),
            Shape::Point(p) => p.distance(point) <= CROSSHAIR_BOX + CROSSHAIR_ARM + tolerance,
            Shape::Polygon(poly) => poly.hit_test(point, tolerance),
            Shape::Unknown => false,
        }
    }
}

/// Distance from a point to a line segment (a→b).
pub fn point_to_segment_dist(point: Point, a: Point, b: Point) -> f64 {
    let seg = kurbo::Vec2::new(b.x - a.x, b.y - a.y);
    let pv = kurbo::Vec2::new(point.x - a.x, point.y - a.y);
    let len_sq = seg.hypot2();
    if len_sq < f64::EPSILON {
        return pv.hypot();
    }
    let t = (pv.dot(seg) / len_sq).clamp(0.0, 1.0);
    let proj = Point::new(a.x + t * seg.x, a.y + t * seg.y);
    ((point.x - proj.x).powi(2) + (point.y - proj.y).powi(2)).sqrt()
}

/// Minimum distance from a point to a polyline (sequence of connected segments).
pub fn point_to_polyline_dist(point: Point, points: &[Point]) -> f64 {
    points
        .windows(2)
        .map(|w| point_to_segment_dist(point, w[0], w[1]))
        .fold(f64::INFINITY, f64::min)
}
