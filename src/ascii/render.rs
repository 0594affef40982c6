//! Pipeline assembly: decoded pixel buffer to rendered text art.

use image::RgbImage;

use super::charset::GlyphRamp;
use super::dimensions::{grid_size, DEFAULT_CELL_ASPECT};
use super::error::RenderError;
use super::frame::AsciiArt;
use super::luma::to_luma;
use super::mapping::map_to_glyphs;
use super::sampler::sample_cells;

/// Default output width budget in character columns.
pub const DEFAULT_MAX_COLS: u16 = 50;

/// Options controlling a single render.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Output width budget in character columns (the output always uses the
    /// full budget).
    pub max_cols: u16,
    /// Character cell aspect ratio (height / width) used to derive the row
    /// count.
    pub cell_aspect: f32,
    /// Glyph ramp, ordered darkest to brightest.
    pub ramp: GlyphRamp,
    /// Flip brightness before mapping (for light terminals).
    pub invert: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_cols: DEFAULT_MAX_COLS,
            cell_aspect: DEFAULT_CELL_ASPECT,
            ramp: GlyphRamp::default(),
            invert: false,
        }
    }
}

impl RenderOptions {
    /// Build validated options.
    ///
    /// Configuration problems surface here, before any image is touched.
    pub fn new(
        max_cols: u16,
        cell_aspect: f32,
        ramp: GlyphRamp,
        invert: bool,
    ) -> Result<Self, RenderError> {
        let options = Self {
            max_cols,
            cell_aspect,
            ramp,
            invert,
        };
        options.validate()?;
        Ok(options)
    }

    /// Check that the options can produce a render.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.max_cols == 0 {
            return Err(RenderError::InvalidConfiguration {
                reason: "column budget must be at least 1".to_string(),
            });
        }
        if !self.cell_aspect.is_finite() || self.cell_aspect <= 0.0 {
            return Err(RenderError::InvalidConfiguration {
                reason: format!(
                    "cell aspect factor must be positive, got {}",
                    self.cell_aspect
                ),
            });
        }
        if self.ramp.is_empty() {
            return Err(RenderError::InvalidConfiguration {
                reason: "glyph ramp must contain at least one character".to_string(),
            });
        }
        Ok(())
    }
}

/// Render a decoded pixel buffer as a glyph grid.
///
/// Runs the full pipeline: grid sizing, luminance conversion, per-cell
/// brightness aggregation, and glyph mapping. Every stage is a pure function
/// of its input; a failure aborts the render before any output exists, and
/// identical input and options always produce identical output.
pub fn render(image: &RgbImage, options: &RenderOptions) -> Result<AsciiArt, RenderError> {
    options.validate()?;
    let (cols, rows) = grid_size(
        image.width(),
        image.height(),
        options.max_cols,
        options.cell_aspect,
    )?;

    let gray = to_luma(image);
    let brightness = sample_cells(&gray, image.width(), image.height(), cols, rows);
    let glyphs = map_to_glyphs(&brightness, &options.ramp, options.invert);

    Ok(AsciiArt::from_chars(glyphs, cols, rows))
}

/// Render and assemble the final text block in one call.
pub fn render_to_text(image: &RgbImage, options: &RenderOptions) -> Result<String, RenderError> {
    Ok(render(image, options)?.to_text())
}
