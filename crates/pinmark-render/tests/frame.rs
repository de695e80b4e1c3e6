use kurbo::{Point, Size};
use pinmark_core::{Canvas, InputEvent, KeyEvent, LoadedImage, MouseButton, SurfaceBounds, ToolKind};
use pinmark_render::{Palette, Primitive, RecordingRenderer, RenderContext, Renderer};

fn surface() -> Option<SurfaceBounds> {
    Some(SurfaceBounds::new(Point::ZERO, Size::new(320.0, 240.0)))
}

fn canvas() -> Canvas {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut canvas = Canvas::new();
    canvas.load_image(LoadedImage::from_rgba(4, 4, vec![200; 64]).unwrap());
    canvas
}

fn press(canvas: &mut Canvas, x: f64, y: f64) {
    canvas.handle_event(InputEvent::PointerDown {
        position: Point::new(x, y),
        button: MouseButton::Left,
        surface: surface(),
    });
}

fn hover(canvas: &mut Canvas, x: f64, y: f64) {
    canvas.handle_event(InputEvent::PointerMove {
        position: Point::new(x, y),
        surface: surface(),
    });
}

fn release(canvas: &mut Canvas, x: f64, y: f64) {
    canvas.handle_event(InputEvent::PointerUp {
        position: Point::new(x, y),
        button: MouseButton::Left,
        surface: surface(),
    });
}

fn record(canvas: &Canvas) -> Vec<Primitive> {
    let mut renderer = RecordingRenderer::new();
    let ctx = RenderContext::new(canvas, Size::new(320.0, 240.0));
    renderer.build_scene(&ctx).unwrap();
    renderer.primitives().to_vec()
}

fn dashed(primitives: &[Primitive]) -> usize {
    primitives.iter().filter(|p| p.style().dash.is_some()).count()
}

#[test]
fn rectangle_drag_shows_preview_then_committed_shape() {
    let mut canvas = canvas();

    press(&mut canvas, 10.0, 10.0);
    hover(&mut canvas, 60.0, 50.0);
    let during = record(&canvas);
    assert_eq!(during.len(), 1);
    assert_eq!(dashed(&during), 1);

    release(&mut canvas, 60.0, 50.0);
    let after = record(&canvas);
    assert_eq!(after.len(), 1);
    assert_eq!(dashed(&after), 0);
    // Newly committed annotations are selected, so they glow.
    assert!(after[0].style().glow.is_some());
}

#[test]
fn preview_is_drawn_above_committed_annotations() {
    let mut canvas = canvas();
    canvas.set_tool(ToolKind::Point);
    press(&mut canvas, 100.0, 100.0);

    canvas.set_tool(ToolKind::Polygon);
    press(&mut canvas, 0.0, 0.0);
    press(&mut canvas, 30.0, 0.0);
    hover(&mut canvas, 30.0, 30.0);

    let frame = record(&canvas);
    // Crosshair first, then two dashed segments and two vertex markers.
    assert_eq!(frame.len(), 5 + 4);
    assert!(frame[..5].iter().all(|p| p.style().dash.is_none()));
    assert_eq!(dashed(&frame[5..]), 2);
    assert!(matches!(frame.last(), Some(Primitive::Circle { .. })));
}

#[test]
fn only_the_selected_annotation_glows() {
    let mut canvas = canvas();
    canvas.set_tool(ToolKind::Point);
    press(&mut canvas, 20.0, 20.0);
    press(&mut canvas, 200.0, 200.0);

    let frame = record(&canvas);
    let glowing = frame.iter().filter(|p| p.style().glow.is_some()).count();
    assert_eq!(frame.len(), 10);
    assert_eq!(glowing, 5);
    assert!(frame[5..].iter().all(|p| p.style().glow.is_some()));
}

#[test]
fn escape_removes_the_preview() {
    let mut canvas = canvas();
    canvas.set_tool(ToolKind::Polygon);
    press(&mut canvas, 0.0, 0.0);
    assert!(!record(&canvas).is_empty());

    canvas.handle_event(InputEvent::Key(KeyEvent::Pressed("Escape".to_string())));
    assert!(record(&canvas).is_empty());
}

#[test]
fn custom_palette_reaches_primitives() {
    let mut canvas = canvas();
    canvas.set_tool(ToolKind::Point);
    press(&mut canvas, 20.0, 20.0);

    let mut palette = Palette::default();
    palette.point.stroke = peniko::Color::from_rgba8(1, 2, 3, 255);

    let mut renderer = RecordingRenderer::new();
    let ctx = RenderContext::new(&canvas, Size::new(320.0, 240.0)).with_palette(palette);
    renderer.build_scene(&ctx).unwrap();

    let rgba = renderer.primitives()[0].style().stroke.to_rgba8();
    assert_eq!((rgba.r, rgba.g, rgba.b), (1, 2, 3));
}
