//! Polygon shape.

use super::point_to_polyline_dist;
use kurbo::{BezPath, Point, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// An ordered vertex sequence.
///
/// Storage is open (the last vertex is not repeated); the shape is always
/// drawn and hit-tested as closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    /// Vertices in placement order.
    pub points: Vec<Point>,
}

impl Polygon {
    /// Smallest vertex count that encloses an area.
    pub const MIN_VERTICES: usize = 3;

    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Closed path through the vertices in order.
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut iter = self.points.iter();
        if let Some(first) = iter.next() {
            path.move_to(*first);
            for p in iter {
                path.line_to(*p);
            }
            path.close_path();
        }
        path
    }

    /// Vertices followed by the first one again, i.e. every edge including
    /// the closing edge.
    fn closed_ring(&self) -> Vec<Point> {
        let mut ring = self.points.clone();
        if let Some(first) = self.points.first() {
            ring.push(*first);
        }
        ring
    }

    /// Inside the filled area, or within `tolerance` of any edge.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        if self.points.len() < Self::MIN_VERTICES {
            return false;
        }
        if self.to_path().winding(point) != 0 {
            return true;
        }
        point_to_polyline_dist(point, &self.closed_ring()) <= tolerance
    }
}
