use bead_match::Color;
use image::RgbImage;
use std::path::Path;

use crate::error::ConvertError;

/// A decoded input image, reduced to opaque 8-bit RGB
#[derive(Debug, Clone)]
pub struct SourceImage {
    /// File name shown in the sheet title
    pub name: String,
    pub width: u32,
    pub height: u32,
    /// Row-major pixels
    pub pixels: Vec<Color>,
}

impl SourceImage {
    /// Decode an image file (PNG, JPEG, GIF or BMP)
    ///
    /// Alpha is dropped without compositing; GIFs contribute their first
    /// frame.
    pub fn open(path: &Path) -> Result<Self, ConvertError> {
        let decoded = image::open(path).map_err(|source| ConvertError::ImageLoad {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let image = Self::from_rgb(name, &decoded.to_rgb8());
        tracing::debug!(
            path = %path.display(),
            width = image.width,
            height = image.height,
            "Decoded input image"
        );
        Ok(image)
    }

    pub fn from_rgb(name: impl Into<String>, rgb: &RgbImage) -> Self {
        let pixels = rgb.pixels().map(|p| Color::from_bytes(p.0)).collect();
        Self {
            name: name.into(),
            width: rgb.width(),
            height: rgb.height(),
            pixels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, Rgba, RgbaImage};

    #[test]
    fn test_from_rgb_is_row_major() {
        let mut img = RgbImage::from_pixel(3, 2, Rgb([0, 0, 0]));
        img.put_pixel(2, 1, Rgb([255, 0, 0]));
        let source = SourceImage::from_rgb("t.png", &img);

        assert_eq!((source.width, source.height), (3, 2));
        assert_eq!(source.pixels.len(), 6);
        assert_eq!(source.pixels[5], Color::new(255, 0, 0));
        assert_eq!(source.pixels[2], Color::new(0, 0, 0));
    }

    #[test]
    fn test_open_png_drops_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("half.png");
        RgbaImage::from_pixel(2, 2, Rgba([236, 216, 0, 128]))
            .save(&path)
            .unwrap();

        let source = SourceImage::open(&path).unwrap();
        assert_eq!(source.name, "half.png");
        assert!(source.pixels.iter().all(|&c| c == Color::new(236, 216, 0)));
    }

    #[test]
    fn test_open_missing_file() {
        let err = SourceImage::open(Path::new("/definitely/not/here.png")).unwrap_err();
        assert!(matches!(err, ConvertError::ImageLoad { .. }));
    }

    #[test]
    fn test_open_garbage_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not a png").unwrap();
        assert!(matches!(
            SourceImage::open(&path),
            Err(ConvertError::ImageLoad { .. })
        ));
    }
}
