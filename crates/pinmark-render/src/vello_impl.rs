//! Vello-based renderer implementation.

use crate::primitives::{PaintStyle, Primitive};
use crate::renderer::{RenderContext, RenderResult, Renderer};
use crate::style::Glow;
use kurbo::{Affine, BezPath, Rect, Stroke};
use peniko::{Color, Fill};
use pinmark_core::loader::{ImageId, LoadedImage};
use std::sync::Arc;
use vello::Scene;

/// Number of rings used to fake the selection blur.
const GLOW_RINGS: u32 = 3;

/// Vello-based renderer for GPU-accelerated 2D graphics.
pub struct VelloRenderer {
    /// The Vello scene being built.
    scene: Scene,
    /// Uploaded copy of the canvas image, keyed by the image id.
    image_cache: Option<(ImageId, peniko::ImageData)>,
}

impl Default for VelloRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloRenderer {
    /// Create a new Vello renderer.
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            image_cache: None,
        }
    }

    /// Get the built scene for rendering.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take ownership of the scene (resets internal scene).
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }

    fn image_data(&mut self, image: &LoadedImage) -> peniko::ImageData {
        if let Some((cached_id, data)) = &self.image_cache {
            if *cached_id == image.id() {
                return data.clone();
            }
        }

        log::debug!("Uploading {}x{} image", image.width(), image.height());
        let data = peniko::ImageData {
            data: peniko::Blob::new(Arc::new(image.rgba().to_vec())),
            format: peniko::ImageFormat::Rgba8,
            width: image.width(),
            height: image.height(),
            alpha_type: peniko::ImageAlphaType::Alpha,
        };
        self.image_cache = Some((image.id(), data.clone()));
        data
    }

    fn render_image(&mut self, image: &LoadedImage, transform: Affine) {
        let data = self.image_data(image);
        self.scene.draw_image(&data.into(), transform);
    }

    fn render_primitive(&mut self, primitive: &Primitive, transform: Affine) {
        let path = primitive.to_path();
        let style = primitive.style();

        if let Some(glow) = style.glow {
            self.render_glow(&path, style, glow, transform);
        }

        if let Some(fill) = style.fill {
            self.scene.fill(Fill::NonZero, transform, fill, None, &path);
        }

        if style.stroke_width > 0.0 {
            let mut stroke = Stroke::new(style.stroke_width);
            if let Some(dash) = style.dash {
                stroke = stroke.with_dashes(0.0, &[dash, dash]);
            }
            self.scene.stroke(&stroke, transform, style.stroke, None, &path);
        }
    }

    /// Concentric translucent strokes approximating a drop-shadow blur.
    fn render_glow(&mut self, path: &BezPath, style: &PaintStyle, glow: Glow, transform: Affine) {
        let rgba = glow.color.to_rgba8();
        for ring in (1..=GLOW_RINGS).rev() {
            let spread = glow.radius * ring as f64 / GLOW_RINGS as f64;
            let alpha = (rgba.a as f64 * 0.5 / ring as f64) as u8;
            let color = Color::from_rgba8(rgba.r, rgba.g, rgba.b, alpha);
            let stroke = Stroke::new(style.stroke_width + spread);
            self.scene.stroke(&stroke, transform, color, None, path);
        }
    }
}

impl Renderer for VelloRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()> {
        ctx.validate()?;

        // Clear the scene
        self.scene.reset();

        let viewport = Rect::from_origin_size(kurbo::Point::ZERO, ctx.viewport_size);
        let background = self.background_color(ctx);
        self.scene.fill(Fill::NonZero, Affine::IDENTITY, background, None, &viewport);

        let Some(image) = ctx.canvas.image() else {
            self.image_cache = None;
            return Ok(());
        };

        let transform = ctx.transform();
        self.render_image(image, transform);

        for primitive in ctx.primitives() {
            self.render_primitive(&primitive, transform);
        }
        Ok(())
    }
}
