//! Image loading: decoded background image for the annotation surface.

use crate::error::ImageLoadError;
use kurbo::Size;
use uuid::Uuid;

/// Identity of a loaded image. Clones share it; every load gets a new one.
pub type ImageId = Uuid;

/// An image the user is annotating, decoded to RGBA8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedImage {
    id: ImageId,
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl LoadedImage {
    /// Decode an uploaded file. The format is guessed from the content.
    pub fn decode(bytes: &[u8]) -> Result<Self, ImageLoadError> {
        if bytes.is_empty() {
            return Err(ImageLoadError::Empty);
        }
        let decoded = image::load_from_memory(bytes)?;
        let rgba = decoded.to_rgba8();
        Self::from_rgba(rgba.width(), rgba.height(), rgba.into_raw())
    }

    /// Wrap pixels the host has already decoded.
    ///
    /// `rgba` must hold exactly `width * height` pixels of 4 bytes each.
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, ImageLoadError> {
        if width == 0 || height == 0 {
            return Err(ImageLoadError::Empty);
        }
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(ImageLoadError::SizeMismatch {
                width,
                height,
                len: rgba.len(),
            });
        }
        Ok(Self {
            id: Uuid::new_v4(),
            width,
            height,
            rgba,
        })
    }

    pub fn id(&self) -> ImageId {
        self.id
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width as f64, self.height as f64)
    }

    /// RGBA pixel data (4 bytes per pixel).
    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(width, height, image::Rgba([10, 20, 30, 255]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_decode_png() {
        let img = LoadedImage::decode(&png_bytes(3, 2)).unwrap();
        assert_eq!(img.width(), 3);
        assert_eq!(img.height(), 2);
        assert_eq!(img.rgba().len(), 3 * 2 * 4);
        assert_eq!(&img.rgba()[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(LoadedImage::decode(&[]), Err(ImageLoadError::Empty)));
    }

    #[test]
    fn test_from_rgba_checks_length() {
        let err = LoadedImage::from_rgba(4, 4, vec![0; 10]).unwrap_err();
        assert!(matches!(
            err,
            ImageLoadError::SizeMismatch {
                width: 4,
                height: 4,
                len: 10
            }
        ));
        assert!(matches!(LoadedImage::from_rgba(0, 3, Vec::new()), Err(ImageLoadError::Empty)));
        assert!(LoadedImage::from_rgba(2, 1, vec![0; 8]).is_ok());
    }

    #[test]
    fn test_each_load_has_its_own_id() {
        let a = LoadedImage::from_rgba(1, 1, vec![0; 4]).unwrap();
        let b = LoadedImage::from_rgba(1, 1, vec![0; 4]).unwrap();
        assert_ne!(a.id(), b.id());
        assert_eq!(a.clone().id(), a.id());
    }

    #[test]
    fn test_garbage_input() {
        let err = LoadedImage::decode(b"definitely not an image").unwrap_err();
        assert!(matches!(err, ImageLoadError::Decode(_)));
    }
}
