//! Square thumbnail generation: aspect-fill, centre crop, JPEG.

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;

use crate::error::ImageryError;

/// Target geometry and compression of cached thumbnails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThumbnailSettings {
    /// Side of the square output, in pixels.
    pub dimension: u32,
    /// JPEG quality, 1..=100.
    pub quality: u8,
}

impl Default for ThumbnailSettings {
    fn default() -> Self {
        Self {
            dimension: 150,
            quality: 75,
        }
    }
}

impl ThumbnailSettings {
    #[must_use]
    pub fn new(dimension: u32, quality: u8) -> Self {
        Self {
            dimension: dimension.max(1),
            quality: quality.clamp(1, 100),
        }
    }
}

/// Decodes `bytes`, scales to cover a `dimension`² square, crops the centre
/// and re-encodes as JPEG. CPU-bound; see [`encode_thumbnail`] for async
/// callers.
///
/// # Errors
///
/// Returns [`ImageryError::Image`] if the input cannot be decoded or the
/// output cannot be encoded.
pub fn encode_thumbnail_blocking(
    bytes: &[u8],
    settings: ThumbnailSettings,
) -> Result<Vec<u8>, ImageryError> {
    let decoded = image::load_from_memory(bytes)?;
    let square = decoded
        .resize_to_fill(settings.dimension, settings.dimension, FilterType::Lanczos3)
        .to_rgb8();

    let mut out = Vec::new();
    {
        let mut encoder = JpegEncoder::new_with_quality(&mut out, settings.quality);
        encoder.encode(
            square.as_raw(),
            square.width(),
            square.height(),
            image::ExtendedColorType::Rgb8,
        )?;
    }
    Ok(out)
}

/// Runs [`encode_thumbnail_blocking`] on the blocking thread pool.
///
/// # Errors
///
/// As [`encode_thumbnail_blocking`], plus [`ImageryError::Task`] if the
/// blocking task panics.
pub async fn encode_thumbnail(
    bytes: Vec<u8>,
    settings: ThumbnailSettings,
) -> Result<Vec<u8>, ImageryError> {
    tokio::task::spawn_blocking(move || encode_thumbnail_blocking(&bytes, settings))
        .await
        .map_err(|e| ImageryError::Task(e.to_string()))?
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{ImageFormat, Rgb, RgbImage};

    use super::*;

    /// 300×100 PNG with red, green and blue vertical thirds.
    fn striped_png() -> Vec<u8> {
        let img = RgbImage::from_fn(300, 100, |x, _| match x {
            0..100 => Rgb([255, 0, 0]),
            100..200 => Rgb([0, 255, 0]),
            _ => Rgb([0, 0, 255]),
        });
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn output_is_square_jpeg_of_target_size() {
        let jpeg = encode_thumbnail_blocking(&striped_png(), ThumbnailSettings::default()).unwrap();
        assert_eq!(image::guess_format(&jpeg).unwrap(), ImageFormat::Jpeg);
        let decoded = image::load_from_memory(&jpeg).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (150, 150));
    }

    #[test]
    fn wide_image_is_centre_cropped() {
        let jpeg = encode_thumbnail_blocking(&striped_png(), ThumbnailSettings::new(150, 90)).unwrap();
        let decoded = image::load_from_memory(&jpeg).unwrap().to_rgb8();
        // Scaled to 450×150, the crop keeps exactly the green middle third.
        for x in [20, 75, 130] {
            let Rgb([r, g, b]) = *decoded.get_pixel(x, 75);
            assert!(g > 200 && r < 60 && b < 60, "pixel {x} = ({r}, {g}, {b})");
        }
    }

    #[test]
    fn undecodable_bytes_are_an_image_error() {
        let err = encode_thumbnail_blocking(b"not an image", ThumbnailSettings::default())
            .unwrap_err();
        assert!(matches!(err, ImageryError::Image(_)), "got: {err:?}");
    }

    #[test]
    fn settings_are_clamped() {
        assert_eq!(
            ThumbnailSettings::new(0, 0),
            ThumbnailSettings {
                dimension: 1,
                quality: 1
            }
        );
        assert_eq!(ThumbnailSettings::new(64, 250).quality, 100);
    }

    #[tokio::test]
    async fn async_wrapper_matches_blocking_output_size() {
        let jpeg = encode_thumbnail(striped_png(), ThumbnailSettings::new(64, 75))
            .await
            .unwrap();
        let decoded = image::load_from_memory(&jpeg).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (64, 64));
    }
}
