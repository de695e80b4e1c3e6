//! Error types.

use crate::annotation::AnnotationId;
use thiserror::Error;

/// Annotation store errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnnotationError {
    #[error("Annotation not found: {0}")]
    NotFound(AnnotationId),
}

/// Image loading errors.
#[derive(Debug, Error)]
pub enum ImageLoadError {
    #[error("No image data")]
    Empty,
    #[error("Pixel data is {len} bytes, expected {width}x{height} RGBA")]
    SizeMismatch { width: u32, height: u32, len: usize },
    #[error("Decode error: {0}")]
    Decode(#[from] image::ImageError),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
