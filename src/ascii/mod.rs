//! Text-art renderer: converts a decoded pixel buffer to monospace glyph art.
//!
//! The pipeline runs in four stages, each a pure function of its input:
//!
//! 1. **Grid sizing** - column budget plus aspect-corrected row count
//! 2. **Luminance conversion** - RGB to gray using BT.601 weights
//! 3. **Cell sampling** - per-cell brightness averaged over source regions
//! 4. **Glyph mapping** - normalized brightness to a ramp glyph
//!
//! [`render`] assembles the stages; the individual stage functions stay
//! public so each can be exercised in isolation.
//!
//! # Glyph ramps
//!
//! Ramps are ordered darkest to brightest (see [`GlyphRamp`] for the
//! direction policy). Presets are available via [`CharSet`]:
//! - `Standard` - 10-level ASCII density ramp
//! - `Blocks` - Unicode block characters
//! - `Minimal` - 4-level clean look

mod charset;
mod dimensions;
mod error;
mod frame;
mod luma;
mod mapping;
mod render;
mod sampler;

pub use charset::{CharSet, GlyphRamp, BLOCKS_RAMP, MINIMAL_RAMP, STANDARD_RAMP};
pub use dimensions::{grid_size, DEFAULT_CELL_ASPECT};
pub use error::RenderError;
pub use frame::AsciiArt;
pub use luma::to_luma;
pub use mapping::map_to_glyphs;
pub use render::{render, render_to_text, RenderOptions, DEFAULT_MAX_COLS};
pub use sampler::sample_cells;
