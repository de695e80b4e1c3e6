//! Backend-neutral draw list for annotations and in-progress gestures.
//!
//! Everything here is pure: an annotation (or preview) plus its selection
//! flag maps to a list of [`Primitive`]s in surface coordinates. Backends
//! such as the Vello renderer only translate primitives into draw calls.

use crate::style::{self, Glow, Palette, PREVIEW_DASH, VERTEX_MARKER_RADIUS};
use kurbo::{BezPath, Circle, Line, Point, Rect, Shape as KurboShape};
use peniko::Color;
use pinmark_core::annotation::Annotation;
use pinmark_core::canvas::Canvas;
use pinmark_core::shapes::{Shape, CROSSHAIR_ARM, CROSSHAIR_BOX};
use pinmark_core::tools::Preview;

/// How a primitive is painted.
#[derive(Debug, Clone, Copy)]
pub struct PaintStyle {
    pub stroke: Color,
    pub stroke_width: f64,
    pub fill: Option<Color>,
    /// Dash length; dashes and gaps are equal.
    pub dash: Option<f64>,
    /// Halo drawn behind the primitive when selected.
    pub glow: Option<Glow>,
}

impl PaintStyle {
    /// Solid outline, no fill.
    pub fn stroke(color: Color, width: f64) -> Self {
        Self {
            stroke: color,
            stroke_width: width,
            fill: None,
            dash: None,
            glow: None,
        }
    }

    pub fn with_fill(mut self, fill: Option<Color>) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_dash(mut self, dash: f64) -> Self {
        self.dash = Some(dash);
        self
    }

    pub fn with_glow(mut self, glow: Option<Glow>) -> Self {
        self.glow = glow;
        self
    }
}

/// A single drawable item.
#[derive(Debug, Clone)]
pub enum Primitive {
    Rect { rect: Rect, style: PaintStyle },
    /// Closed polygon outline.
    Polygon { points: Vec<Point>, style: PaintStyle },
    Line { from: Point, to: Point, style: PaintStyle },
    Circle { center: Point, radius: f64, style: PaintStyle },
}

impl Primitive {
    pub fn style(&self) -> &PaintStyle {
        match self {
            Primitive::Rect { style, .. }
            | Primitive::Polygon { style, .. }
            | Primitive::Line { style, .. }
            | Primitive::Circle { style, .. } => style,
        }
    }

    /// Outline of the primitive as a path.
    pub fn to_path(&self) -> BezPath {
        match self {
            Primitive::Rect { rect, .. } => rect.to_path(0.1),
            Primitive::Polygon { points, .. } => {
                let mut path = BezPath::new();
                if let Some((first, rest)) = points.split_first() {
                    path.move_to(*first);
                    for p in rest {
                        path.line_to(*p);
                    }
                    path.close_path();
                }
                path
            }
            Primitive::Line { from, to, .. } => Line::new(*from, *to).to_path(0.1),
            Primitive::Circle { center, radius, .. } => Circle::new(*center, *radius).to_path(0.1),
        }
    }
}

/// Primitives for a bare shape.
pub fn render_shape(shape: &Shape, selected: bool, palette: &Palette) -> Vec<Primitive> {
    let Some(kind) = shape.kind() else {
        log::debug!("Skipping shape of unknown kind");
        return Vec::new();
    };
    let kind_style = palette.for_kind(kind);
    let glow = selected.then_some(palette.selection_glow);
    let width = style::stroke_width(selected);

    match shape {
        Shape::Rectangle(r) => vec![Primitive::Rect {
            rect: r.as_rect(),
            style: PaintStyle::stroke(kind_style.stroke, width)
                .with_fill(kind_style.fill)
                .with_glow(glow),
        }],
        Shape::Point(p) => {
            let paint = PaintStyle::stroke(kind_style.stroke, width / 2.0).with_glow(glow);
            crosshair(*p, paint)
        }
        Shape::Polygon(poly) => vec![Primitive::Polygon {
            points: poly.points.clone(),
            style: PaintStyle::stroke(kind_style.stroke, width)
                .with_fill(kind_style.fill)
                .with_glow(glow),
        }],
        Shape::Unknown => Vec::new(),
    }
}

/// Primitives for a committed annotation.
pub fn render_annotation(
    annotation: &Annotation,
    selected: bool,
    palette: &Palette,
) -> Vec<Primitive> {
    render_shape(&annotation.shape, selected, palette)
}

/// Primitives for the gesture in progress.
pub fn render_preview(preview: &Preview, palette: &Palette) -> Vec<Primitive> {
    match preview {
        Preview::Rectangle(r) => vec![Primitive::Rect {
            rect: r.as_rect(),
            style: PaintStyle::stroke(palette.rectangle.stroke, style::BASE_STROKE_WIDTH)
                .with_fill(Some(palette.rectangle_preview_fill))
                .with_dash(PREVIEW_DASH),
        }],
        Preview::Polygon { vertices, cursor } => {
            let segment = PaintStyle::stroke(palette.polygon.stroke, style::BASE_STROKE_WIDTH)
                .with_dash(PREVIEW_DASH);
            let marker = PaintStyle {
                stroke: palette.polygon.stroke,
                stroke_width: 0.0,
                fill: Some(palette.polygon.stroke),
                dash: None,
                glow: None,
            };

            let mut out: Vec<Primitive> = vertices
                .windows(2)
                .map(|w| Primitive::Line {
                    from: w[0],
                    to: w[1],
                    style: segment,
                })
                .collect();
            if let (Some(last), Some(cursor)) = (vertices.last(), cursor) {
                out.push(Primitive::Line {
                    from: *last,
                    to: *cursor,
                    style: segment,
                });
            }
            out.extend(vertices.iter().map(|v| Primitive::Circle {
                center: *v,
                radius: VERTEX_MARKER_RADIUS,
                style: marker,
            }));
            out
        }
    }
}

/// Committed annotations in insertion order, then the preview on top.
pub fn render_canvas(canvas: &Canvas, palette: &Palette) -> Vec<Primitive> {
    let store = canvas.store();
    let mut out: Vec<Primitive> = store
        .iter()
        .flat_map(|a| render_annotation(a, store.is_selected(a.id()), palette))
        .collect();
    if let Some(preview) = canvas.preview() {
        out.extend(render_preview(&preview, palette));
    }
    out
}

/// Center box plus four arms starting at the box edge.
fn crosshair(center: Point, style: PaintStyle) -> Vec<Primitive> {
    let (x, y) = (center.x, center.y);
    let inner = CROSSHAIR_BOX;
    let outer = CROSSHAIR_BOX + CROSSHAIR_ARM;
    let arm = |from: (f64, f64), to: (f64, f64)| Primitive::Line {
        from: Point::new(x + from.0, y + from.1),
        to: Point::new(x + to.0, y + to.1),
        style,
    };

    vec![
        Primitive::Rect {
            rect: Rect::new(x - inner, y - inner, x + inner, y + inner),
            style,
        },
        arm((-outer, 0.0), (-inner, 0.0)),
        arm((inner, 0.0), (outer, 0.0)),
        arm((0.0, -outer), (0.0, -inner)),
        arm((0.0, inner), (0.0, outer)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinmark_core::shapes::{Polygon, Rectangle};

    fn poly() -> Shape {
        Shape::Polygon(Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ]))
    }

    #[test]
    fn test_rectangle_primitive() {
        let palette = Palette::default();
        let shape = Shape::Rectangle(Rectangle::new(10.0, 20.0, 30.0, 40.0));
        let prims = render_shape(&shape, false, &palette);

        assert_eq!(prims.len(), 1);
        match &prims[0] {
            Primitive::Rect { rect, style } => {
                assert_eq!(*rect, Rect::new(10.0, 20.0, 40.0, 60.0));
                assert!((style.stroke_width - 2.0).abs() < f64::EPSILON);
                assert!(style.fill.is_some());
                assert!(style.glow.is_none());
                assert!(style.dash.is_none());
            }
            other => panic!("unexpected primitive {other:?}"),
        }
    }

    #[test]
    fn test_selection_only_changes_emphasis() {
        let palette = Palette::default();
        for shape in [
            Shape::Rectangle(Rectangle::new(1.0, 2.0, 3.0, 4.0)),
            Shape::Point(Point::new(5.0, 5.0)),
            poly(),
        ] {
            let plain = render_shape(&shape, false, &palette);
            let selected = render_shape(&shape, true, &palette);
            assert_eq!(plain.len(), selected.len());

            for (a, b) in plain.iter().zip(&selected) {
                assert_eq!(a.to_path(), b.to_path());
                assert!(a.style().glow.is_none());
                let glow = b.style().glow.expect("selected primitives glow");
                assert!((glow.radius - 8.0).abs() < f64::EPSILON);
                assert!(b.style().stroke_width > a.style().stroke_width);
            }
        }
    }

    #[test]
    fn test_selected_rectangle_stroke_width() {
        let palette = Palette::default();
        let shape = Shape::Rectangle(Rectangle::new(0.0, 0.0, 5.0, 5.0));
        let prims = render_shape(&shape, true, &palette);
        assert!((prims[0].style().stroke_width - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_point_crosshair_geometry() {
        let palette = Palette::default();
        let prims = render_shape(&Shape::Point(Point::new(100.0, 50.0)), false, &palette);

        assert_eq!(prims.len(), 5);
        match &prims[0] {
            Primitive::Rect { rect, style } => {
                assert_eq!(*rect, Rect::new(96.0, 46.0, 104.0, 54.0));
                assert!(style.fill.is_none());
                assert!((style.stroke_width - 1.0).abs() < f64::EPSILON);
            }
            other => panic!("expected center box, got {other:?}"),
        }
        match &prims[1] {
            Primitive::Line { from, to, .. } => {
                assert_eq!(*from, Point::new(84.0, 50.0));
                assert_eq!(*to, Point::new(96.0, 50.0));
            }
            other => panic!("expected arm, got {other:?}"),
        }
        match &prims[4] {
            Primitive::Line { from, to, .. } => {
                assert_eq!(*from, Point::new(100.0, 54.0));
                assert_eq!(*to, Point::new(100.0, 66.0));
            }
            other => panic!("expected arm, got {other:?}"),
        }
    }

    #[test]
    fn test_polygon_primitive_is_closed() {
        let palette = Palette::default();
        let prims = render_shape(&poly(), false, &palette);

        assert_eq!(prims.len(), 1);
        let path = prims[0].to_path();
        assert!(matches!(path.elements().last(), Some(kurbo::PathEl::ClosePath)));
    }

    #[test]
    fn test_unknown_shape_renders_nothing() {
        let palette = Palette::default();
        assert!(render_shape(&Shape::Unknown, true, &palette).is_empty());
    }

    #[test]
    fn test_rectangle_preview_is_dashed() {
        let palette = Palette::default();
        let preview = Preview::Rectangle(Rectangle::new(0.0, 0.0, 10.0, 10.0));
        let prims = render_preview(&preview, &palette);

        assert_eq!(prims.len(), 1);
        let style = prims[0].style();
        assert_eq!(style.dash, Some(PREVIEW_DASH));
        assert!(style.fill.is_some());
    }

    #[test]
    fn test_polygon_preview_with_cursor() {
        let palette = Palette::default();
        let preview = Preview::Polygon {
            vertices: vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)],
            cursor: Some(Point::new(10.0, 10.0)),
        };
        let prims = render_preview(&preview, &palette);

        let lines: Vec<_> = prims.iter().filter(|p| matches!(p, Primitive::Line { .. })).collect();
        let markers: Vec<_> = prims
            .iter()
            .filter(|p| matches!(p, Primitive::Circle { .. }))
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(markers.len(), 2);

        match lines[1] {
            Primitive::Line { from, to, style } => {
                assert_eq!(*from, Point::new(10.0, 0.0));
                assert_eq!(*to, Point::new(10.0, 10.0));
                assert_eq!(style.dash, Some(PREVIEW_DASH));
            }
            _ => unreachable!(),
        }
        match markers[0] {
            Primitive::Circle { radius, .. } => assert!((radius - 3.0).abs() < f64::EPSILON),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_polygon_preview_without_cursor() {
        let palette = Palette::default();
        let preview = Preview::Polygon {
            vertices: vec![Point::new(0.0, 0.0)],
            cursor: None,
        };
        let prims = render_preview(&preview, &palette);

        assert_eq!(prims.len(), 1);
        assert!(matches!(prims[0], Primitive::Circle { .. }));
    }
}
