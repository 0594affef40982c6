//! RGB to luminance conversion using the ITU-R BT.601 weights.

use image::RgbImage;

/// Convert an RGB pixel buffer to per-pixel luminance.
///
/// The luminance formula is `Y = 0.299*R + 0.587*G + 0.114*B`, the standard
/// perceptual weighting: human vision weights green most heavily and blue
/// least, so a flat channel average would misrank colors that read as
/// obviously lighter or darker than each other.
///
/// Uses integer math with the coefficients scaled by 1000, keeping the
/// per-pixel pass free of floating point.
///
/// # Returns
/// One luminance byte (0-255) per pixel, row-major order.
pub fn to_luma(image: &RgbImage) -> Vec<u8> {
    let pixel_count = image.width() as usize * image.height() as usize;
    let mut gray = Vec::with_capacity(pixel_count);

    // Coefficients scaled by 1000: 299 + 587 + 114 = 1000
    for rgb in image.as_raw().chunks_exact(3) {
        let r = rgb[0] as u32;
        let g = rgb[1] as u32;
        let b = rgb[2] as u32;
        let luminance = (299 * r + 587 * g + 114 * b) / 1000;
        gray.push(luminance as u8);
    }

    gray
}
