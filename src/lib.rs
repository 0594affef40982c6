//! asciigram library crate.
//!
//! Image to monospace text art: fetch or read encoded bytes, decode them,
//! and render the pixel buffer as a glyph grid. The [`ascii`] module holds
//! the pure render pipeline; the rest are the thin collaborator boundaries
//! around it (HTTP fetch, byte decoding, delivery formatting,
//! configuration).

pub mod ascii;
pub mod cli;
pub mod config;
pub mod decode;
pub mod fetch;
pub mod output;
