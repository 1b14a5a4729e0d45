use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, GenericImageView, ImageResult};
use std::io::Cursor;

use super::error::{Result, StoreError};

/// Quality used for stored photos unless configured otherwise.
pub const DEFAULT_QUALITY: u8 = 85;

/// Encode an image as JPEG at the given quality (clamped to 1..=100).
///
/// JPEG carries no alpha channel, so the image is flattened to RGB first.
pub fn encode_jpeg(image: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(StoreError::EmptyImage { width, height });
    }

    let rgb = DynamicImage::ImageRgb8(image.to_rgb8());

    let mut buf = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buf, quality.clamp(1, 100));
    rgb.write_with_encoder(encoder).map_err(StoreError::Encode)?;

    Ok(buf.into_inner())
}

/// Decode a stored byte stream, guessing the format from its content.
pub fn decode(bytes: &[u8]) -> ImageResult<DynamicImage> {
    image::load_from_memory(bytes)
}
