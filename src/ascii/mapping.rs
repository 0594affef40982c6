//! Brightness matrix to glyph mapping.

use super::charset::GlyphRamp;

/// Map normalized brightness values to glyphs from the ramp.
///
/// Lower brightness maps to earlier ramp glyphs (darker/less dense), higher
/// brightness to later ones. With `invert` the brightness is flipped before
/// mapping, for light terminal backgrounds.
///
/// # Returns
/// One glyph per input value, same order.
pub fn map_to_glyphs(brightness: &[f32], ramp: &GlyphRamp, invert: bool) -> Vec<char> {
    brightness
        .iter()
        .map(|&b| {
            let b = if invert { 1.0 - b } else { b };
            ramp.glyph(b)
        })
        .collect()
}
