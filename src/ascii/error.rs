//! Error types for the render pipeline.

/// Errors produced by the image-to-text render pipeline.
///
/// The pipeline is pure computation, so nothing here is transient or
/// retriable. Every error is raised before any output is produced; a failed
/// render never yields partial text.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The decoded source has a zero dimension. The decoder contract promises
    /// at least 1x1, but the pipeline rejects degenerate buffers itself
    /// rather than dividing by zero.
    #[error("invalid image: {width}x{height} (both dimensions must be at least 1)")]
    InvalidImage { width: u32, height: u32 },

    /// The render options are unusable: a zero column budget, a non-positive
    /// cell aspect factor, or an empty glyph ramp. Raised when the options
    /// are built, never in the middle of a render.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
}
