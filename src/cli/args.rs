//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::CharacterSet;

/// Render an image from a URL or file as monospace text art
#[derive(Parser, Debug)]
#[command(name = "asciigram")]
#[command(version, about = "Image to text-art renderer", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Image source: an http(s) URL or a local file path
    pub source: Option<String>,

    /// Output width budget in character columns (default: 50)
    #[arg(long, short = 'w')]
    pub width: Option<u16>,

    /// Glyph ramp preset (default: standard)
    #[arg(long)]
    pub charset: Option<CharacterSet>,

    /// Custom glyph ramp, ordered darkest to brightest (overrides --charset)
    #[arg(long)]
    pub ramp: Option<String>,

    /// Invert brightness (for light terminals)
    #[arg(long)]
    pub invert: bool,

    /// Character cell height:width correction factor (default: 2.0)
    #[arg(long)]
    pub aspect: Option<f32>,

    /// Print the art without the surrounding code fence
    #[arg(long)]
    pub raw: bool,

    /// Write the result to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List available glyph ramps
    Charsets,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
