//! Renderer trait abstraction.

use crate::primitives::{render_canvas, Primitive};
use crate::style::Palette;
use kurbo::{Affine, Size};
use peniko::Color;
use pinmark_core::canvas::Canvas;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Invalid viewport: {width}x{height} at scale {scale_factor}")]
    InvalidViewport {
        width: f64,
        height: f64,
        scale_factor: f64,
    },
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The session to render.
    pub canvas: &'a Canvas,
    /// Viewport size in physical pixels.
    pub viewport_size: Size,
    /// Device pixel ratio (for HiDPI).
    pub scale_factor: f64,
    /// Background color shown around the image.
    pub background_color: Color,
    /// Annotation colors.
    pub palette: Palette,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(canvas: &'a Canvas, viewport_size: Size) -> Self {
        Self {
            canvas,
            viewport_size,
            scale_factor: 1.0,
            background_color: Color::from_rgba8(0, 0, 0, 255),
            palette: Palette::default(),
        }
    }

    /// Set the scale factor for HiDPI.
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Surface coordinates to device pixels.
    pub fn transform(&self) -> Affine {
        Affine::scale(self.scale_factor)
    }

    /// Reject frames that cannot be drawn: empty or non-finite viewports and
    /// non-positive scale factors.
    pub fn validate(&self) -> RenderResult<()> {
        let Size { width, height } = self.viewport_size;
        let finite = width.is_finite() && height.is_finite() && self.scale_factor.is_finite();
        if !finite || width <= 0.0 || height <= 0.0 || self.scale_factor <= 0.0 {
            return Err(RendererError::InvalidViewport {
                width,
                height,
                scale_factor: self.scale_factor,
            });
        }
        Ok(())
    }

    /// Everything to draw this frame, back to front.
    pub fn primitives(&self) -> Vec<Primitive> {
        render_canvas(self.canvas, &self.palette)
    }
}

/// Trait for rendering backends.
pub trait Renderer: Send + Sync {
    /// Build the scene/command buffer for a frame.
    ///
    /// Called once per frame after the canvas has handled its input.
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()>;

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Color {
        ctx.background_color
    }
}

/// Renderer that keeps the last frame's primitives instead of drawing them.
///
/// Useful for hosts that paint with their own toolkit, and for tests.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    frame: Vec<Primitive>,
    image_size: Option<Size>,
    background: Option<Color>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Primitives from the last [`Renderer::build_scene`].
    pub fn primitives(&self) -> &[Primitive] {
        &self.frame
    }

    /// Size of the image drawn under the last frame, if any.
    pub fn image_size(&self) -> Option<Size> {
        self.image_size
    }

    /// Clear color of the last frame.
    pub fn background(&self) -> Option<Color> {
        self.background
    }
}

impl Renderer for RecordingRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()> {
        ctx.validate()?;
        self.background = Some(self.background_color(ctx));
        self.image_size = ctx.canvas.image().map(|image| image.size());
        self.frame = ctx.primitives();
        Ok(())
    }
}
