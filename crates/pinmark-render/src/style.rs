//! Colors and stroke weights for each annotation kind.

use peniko::Color;
use pinmark_core::shapes::ShapeKind;

/// Stroke width for unselected annotations.
pub const BASE_STROKE_WIDTH: f64 = 2.0;
/// Stroke width for the selected annotation.
pub const SELECTED_STROKE_WIDTH: f64 = 3.0;
/// Dash length used for in-progress previews.
pub const PREVIEW_DASH: f64 = 4.0;
/// Radius of the markers drawn at placed polygon vertices.
pub const VERTEX_MARKER_RADIUS: f64 = 3.0;

/// Stroke and fill for one shape kind.
#[derive(Debug, Clone, Copy)]
pub struct KindStyle {
    pub stroke: Color,
    pub fill: Option<Color>,
}

/// Soft halo drawn behind the selected annotation.
#[derive(Debug, Clone, Copy)]
pub struct Glow {
    pub color: Color,
    pub radius: f64,
}

/// Full color scheme for annotations and previews.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub rectangle: KindStyle,
    pub point: KindStyle,
    pub polygon: KindStyle,
    /// Fill of the rectangle preview (lighter than committed rectangles).
    pub rectangle_preview_fill: Color,
    /// Halo for the selected annotation.
    pub selection_glow: Glow,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            // Yellow-400 stroke, yellow-500 at 30%.
            rectangle: KindStyle {
                stroke: Color::from_rgba8(250, 204, 21, 255),
                fill: Some(Color::from_rgba8(234, 179, 8, 77)),
            },
            // Green-400, outline only.
            point: KindStyle {
                stroke: Color::from_rgba8(74, 222, 128, 255),
                fill: None,
            },
            // Purple-400 stroke, purple-500 at 30%.
            polygon: KindStyle {
                stroke: Color::from_rgba8(192, 132, 252, 255),
                fill: Some(Color::from_rgba8(168, 85, 247, 77)),
            },
            rectangle_preview_fill: Color::from_rgba8(234, 179, 8, 26),
            selection_glow: Glow {
                color: Color::from_rgba8(103, 232, 249, 255),
                radius: 8.0,
            },
        }
    }
}

impl Palette {
    pub fn for_kind(&self, kind: ShapeKind) -> KindStyle {
        match kind {
            ShapeKind::Rectangle => self.rectangle,
            ShapeKind::Point => self.point,
            ShapeKind::Polygon => self.polygon,
        }
    }
}

/// Stroke width for an annotation given its selection state.
pub fn stroke_width(selected: bool) -> f64 {
    if selected {
        SELECTED_STROKE_WIDTH
    } else {
        BASE_STROKE_WIDTH
    }
}
