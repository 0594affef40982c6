//! Per-cell brightness aggregation over proportional source regions.

/// Aggregate a grayscale source into one normalized brightness per grid cell.
///
/// The source is partitioned into `rows x cols` rectangular regions with
/// proportional boundaries: region `i` spans
/// `[floor(i * src / out), floor((i+1) * src / out))` along each axis,
/// computed in exact integer math. Every region is forced to cover at least
/// one sample, so under extreme upscaling a cell falls back to its nearest
/// source pixel instead of being skipped.
///
/// Each cell's value is the mean luminance of its region, normalized by 255
/// with the division done in float: a region covering equal parts pure black
/// and pure white averages to exactly 0.5.
///
/// # Returns
/// A row-major `Vec<f32>` of length `cols * rows`, every value finite and in
/// `[0.0, 1.0]`. Empty input or a zero dimension yields an empty vector; the
/// caller validates dimensions before sampling.
pub fn sample_cells(
    gray: &[u8],
    img_width: u32,
    img_height: u32,
    cols: u16,
    rows: u16,
) -> Vec<f32> {
    if cols == 0 || rows == 0 || img_width == 0 || img_height == 0 || gray.is_empty() {
        return Vec::new();
    }

    let mut matrix = Vec::with_capacity(cols as usize * rows as usize);

    for cy in 0..rows as u64 {
        let (y0, y1) = region_bounds(cy, img_height as u64, rows as u64);
        for cx in 0..cols as u64 {
            let (x0, x1) = region_bounds(cx, img_width as u64, cols as u64);

            let mut sum = 0u64;
            let mut count = 0u64;
            for py in y0..y1 {
                for px in x0..x1 {
                    let idx = (py * img_width as u64 + px) as usize;
                    if idx < gray.len() {
                        sum += gray[idx] as u64;
                        count += 1;
                    }
                }
            }

            let value = if count > 0 {
                sum as f32 / (count as f32 * 255.0)
            } else {
                0.0
            };
            matrix.push(value.clamp(0.0, 1.0));
        }
    }

    matrix
}

/// Proportional `[start, end)` bounds for output index `i` over `src`
/// samples, clamped so the region always contains at least one sample.
fn region_bounds(i: u64, src: u64, out: u64) -> (u64, u64) {
    let start = (i * src / out).min(src - 1);
    let end = ((i + 1) * src / out).clamp(start + 1, src);
    (start, end)
}
