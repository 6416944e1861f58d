// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding for the placeholder gallery.

use crate::error::Result;
use iced::widget::image;
use image_rs::GenericImageView;
use std::fs;
use std::path::Path;

/// A decoded image ready for display.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }
}

/// Load an image from the given path and return its data.
///
/// Supports the standard raster formats enabled on the `image` crate
/// (PNG, JPEG, GIF, BMP).
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read ([`Error::Io`])
/// - The bytes do not decode as a supported image ([`Error::Image`])
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let img_bytes = fs::read(path.as_ref())?;

    let img = image_rs::load_from_memory(&img_bytes)?;

    let (width, height) = img.dimensions();

    let rgba_img = img.to_rgba8();
    let pixels = rgba_img.into_vec();

    Ok(ImageData::from_rgba(width, height, pixels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn load_png_image_returns_expected_dimensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("sample.png");

        let image = image_rs::RgbaImage::from_pixel(4, 2, image_rs::Rgba([255, 0, 0, 255]));
        image
            .save(&image_path)
            .expect("failed to write temporary png");

        let data = load_image(&image_path).expect("png should load successfully");
        assert_eq!(data.width, 4);
        assert_eq!(data.height, 2);
    }

    #[test]
    fn load_missing_image_returns_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing_path = temp_dir.path().join("does_not_exist.png");

        match load_image(&missing_path) {
            Err(Error::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn load_invalid_png_bytes_returns_image_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let bad_path = temp_dir.path().join("invalid.png");
        fs::write(&bad_path, b"not a png").expect("failed to write invalid data");

        match load_image(&bad_path) {
            Err(Error::Image(message)) => assert!(!message.is_empty()),
            other => panic!("expected Image error for invalid png, got {other:?}"),
        }
    }
}
