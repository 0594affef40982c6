//! Output grid sizing with monospace cell aspect correction.

use super::error::RenderError;

/// Default character cell aspect ratio (height / width).
/// Terminal and chat-client monospace cells are typically ~2x taller than
/// wide; without this correction the rendered art comes out vertically
/// stretched.
pub const DEFAULT_CELL_ASPECT: f32 = 2.0;

/// Compute the output character grid for a source image and a column budget.
///
/// The width always uses the full budget: `cols = max_cols`. The row count
/// follows the source aspect ratio, corrected for the cell shape:
///
/// `rows = round(cols * (img_height / img_width) / cell_aspect)`
///
/// clamped to at least 1. Rounding is round-half-away-from-zero
/// (`f32::round`), so a 100x50 source at a budget of 10 columns and aspect
/// 2.0 yields a 10x3 grid.
///
/// # Errors
/// * [`RenderError::InvalidImage`] if either source dimension is zero.
/// * [`RenderError::InvalidConfiguration`] if `max_cols` is zero or
///   `cell_aspect` is not a positive finite number.
pub fn grid_size(
    img_width: u32,
    img_height: u32,
    max_cols: u16,
    cell_aspect: f32,
) -> Result<(u16, u16), RenderError> {
    if img_width == 0 || img_height == 0 {
        return Err(RenderError::InvalidImage {
            width: img_width,
            height: img_height,
        });
    }
    if max_cols == 0 {
        return Err(RenderError::InvalidConfiguration {
            reason: "column budget must be at least 1".to_string(),
        });
    }
    if !cell_aspect.is_finite() || cell_aspect <= 0.0 {
        return Err(RenderError::InvalidConfiguration {
            reason: format!("cell aspect factor must be positive, got {}", cell_aspect),
        });
    }

    let cols = max_cols;
    let rows = (cols as f32 * (img_height as f32 / img_width as f32) / cell_aspect).round();
    // The cast saturates at u16::MAX for absurdly tall sources.
    let rows = (rows as u16).max(1);

    Ok((cols, rows))
}
