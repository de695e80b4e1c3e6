//! Pinmark Render Library
//!
//! Maps annotations and in-progress gestures to draw primitives, with an
//! optional Vello backend for GPU rendering.

pub mod primitives;
mod renderer;
pub mod style;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use primitives::{
    render_annotation, render_canvas, render_preview, render_shape, PaintStyle, Primitive,
};
pub use renderer::{RecordingRenderer, RenderContext, RenderResult, Renderer, RendererError};
pub use style::{Glow, KindStyle, Palette};

#[cfg(feature = "vello-renderer")]
pub use vello_impl::VelloRenderer;
