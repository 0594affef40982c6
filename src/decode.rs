//! Byte-to-pixel-buffer boundary around the `image` decoder.

use image::RgbImage;

/// Errors from decoding encoded image bytes.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("failed to decode image: {0}")]
    Image(#[from] image::ImageError),
}

/// Decode arbitrary encoded image bytes into an RGB pixel buffer.
///
/// Format detection is the decoder's job; anything the `image` crate can
/// identify (PNG, JPEG, GIF, BMP, WebP, ...) is accepted. The result is
/// converted to RGB8, dropping any alpha channel - transparency plays no
/// part in brightness computation downstream.
pub fn decode_image(bytes: &[u8]) -> Result<RgbImage, DecodeError> {
    let image = image::load_from_memory(bytes)?;
    Ok(image.to_rgb8())
}
