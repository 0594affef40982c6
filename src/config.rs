//! Configuration file handling for asciigram.
//!
//! Loads configuration from `~/.config/asciigram/config.toml` or a custom
//! path. Every field has a default, so a missing file is not an error and a
//! partial file fills in the rest.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::ascii::{DEFAULT_CELL_ASPECT, DEFAULT_MAX_COLS};
use crate::fetch::{DEFAULT_MAX_BYTES, DEFAULT_RETRIES, DEFAULT_TIMEOUT};

/// Configuration file structure for asciigram.
/// Loaded from ~/.config/asciigram/config.toml (or custom path via --config).
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct RenderConfig {
    /// Output width budget in character columns.
    #[serde(default = "default_width")]
    pub width: u16,
    /// Named ramp preset (standard, blocks, minimal).
    #[serde(default)]
    pub charset: Option<String>,
    /// Custom ramp string, darkest to brightest. Takes precedence over
    /// `charset` when both are set.
    #[serde(default)]
    pub ramp: Option<String>,
    /// Flip brightness for light terminals.
    #[serde(default)]
    pub invert: bool,
    /// Character cell height:width correction factor.
    #[serde(default = "default_cell_aspect")]
    pub cell_aspect: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            charset: None,
            ramp: None,
            invert: false,
            cell_aspect: default_cell_aspect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FetchConfig {
    /// Whole-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Download size cap in bytes.
    #[serde(default = "default_max_bytes")]
    pub max_bytes: u64,
    /// Retry attempts for transient network errors.
    #[serde(default = "default_retries")]
    pub retries: u32,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            max_bytes: default_max_bytes(),
            retries: default_retries(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Wrap the rendered art in a fenced code block.
    #[serde(default = "default_true")]
    pub code_block: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            code_block: default_true(),
        }
    }
}

fn default_width() -> u16 {
    DEFAULT_MAX_COLS
}

fn default_cell_aspect() -> f32 {
    DEFAULT_CELL_ASPECT
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

fn default_max_bytes() -> u64 {
    DEFAULT_MAX_BYTES
}

fn default_retries() -> u32 {
    DEFAULT_RETRIES
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a file path.
    /// Returns the default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
                path: path.clone(),
                source: e,
            })?;
            let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
                path: path.clone(),
                source: e,
            })?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("unknown charset '{name}' (expected standard, blocks, or minimal)")]
    UnknownCharset { name: String },
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        })
        .join("asciigram/config.toml")
}
