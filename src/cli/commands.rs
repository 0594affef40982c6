//! Subcommand handlers and the render entrypoint.

use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;

use crate::ascii::{self, CharSet, GlyphRamp, RenderOptions};
use crate::config::{default_path, Config, ConfigError};
use crate::decode;
use crate::fetch::FetchClient;
use crate::output;

use super::args::{Args, Command, ConfigAction};

/// Fully resolved settings for one render: CLI flags override the config
/// file, which overrides the built-in defaults.
#[derive(Debug)]
pub struct Settings {
    pub render: RenderOptions,
    pub fetch_timeout: Duration,
    pub fetch_max_bytes: u64,
    pub fetch_retries: u32,
    pub code_block: bool,
    pub output: Option<PathBuf>,
}

impl Settings {
    /// Merge CLI arguments over a loaded config file.
    ///
    /// Ramp precedence: `--ramp`, then `--charset`, then the config file's
    /// `ramp`, then its `charset`, then the standard preset. A custom ramp
    /// or charset name that cannot be used fails here, before any fetch.
    pub fn resolve(args: &Args, config: &Config) -> Result<Self, Box<dyn Error>> {
        let ramp = if let Some(custom) = &args.ramp {
            GlyphRamp::new(custom)?
        } else if let Some(set) = args.charset {
            GlyphRamp::from_charset(set.into())
        } else if let Some(custom) = &config.render.ramp {
            GlyphRamp::new(custom)?
        } else if let Some(name) = &config.render.charset {
            let set = CharSet::from_name(name).ok_or(ConfigError::UnknownCharset {
                name: name.clone(),
            })?;
            GlyphRamp::from_charset(set)
        } else {
            GlyphRamp::default()
        };

        let render = RenderOptions::new(
            args.width.unwrap_or(config.render.width),
            args.aspect.unwrap_or(config.render.cell_aspect),
            ramp,
            args.invert || config.render.invert,
        )?;

        Ok(Self {
            render,
            fetch_timeout: Duration::from_secs(config.fetch.timeout_secs),
            fetch_max_bytes: config.fetch.max_bytes,
            fetch_retries: config.fetch.retries,
            code_block: !args.raw && config.output.code_block,
            output: args.output.clone(),
        })
    }
}

/// Dispatch a parsed invocation.
pub async fn run(args: Args) -> Result<(), Box<dyn Error>> {
    match args.command {
        Some(Command::Charsets) => {
            list_charsets();
            Ok(())
        }
        Some(Command::Config { ref action }) => handle_config_action(action.clone()),
        None => run_render(args).await,
    }
}

/// The render command: obtain bytes, decode, render, deliver.
async fn run_render(args: Args) -> Result<(), Box<dyn Error>> {
    let source = args
        .source
        .clone()
        .ok_or("missing image source (pass a URL or file path, or see --help)")?;

    let config = Config::load(args.config.as_deref())?;
    let settings = Settings::resolve(&args, &config)?;

    let bytes = obtain_bytes(&source, &settings).await?;
    let image = decode::decode_image(&bytes)?;
    log::debug!("decoded {}x{} pixel image", image.width(), image.height());

    let text = ascii::render_to_text(&image, &settings.render)?;
    let message = output::format_message(&text, settings.code_block);
    output::deliver(&message, settings.output.as_deref())?;

    Ok(())
}

/// Read the source bytes: HTTP for URLs, the filesystem for anything else.
async fn obtain_bytes(source: &str, settings: &Settings) -> Result<Vec<u8>, Box<dyn Error>> {
    if source.starts_with("http://") || source.starts_with("https://") {
        let client = FetchClient::with_limits(
            settings.fetch_timeout,
            settings.fetch_max_bytes,
            settings.fetch_retries,
        )?;
        Ok(client.fetch(source).await?)
    } else {
        std::fs::read(source)
            .map_err(|e| format!("failed to read '{}': {}", source, e).into())
    }
}

/// List the built-in glyph ramps and print them to stdout.
pub fn list_charsets() {
    println!("Available charsets:");
    for set in CharSet::all() {
        println!("  {:<10} {:?}", set.name(), set.ramp_str());
    }
    println!();
    println!("Use --charset <name> to select one, or --ramp to supply your own.");
}

/// Template written by `config init`.
const DEFAULT_CONFIG: &str = r#"# asciigram configuration

[render]
width = 50
charset = "standard"
# Custom ramp, darkest to brightest (takes precedence over charset):
# ramp = " .:-=+*#%@"
invert = false
cell_aspect = 2.0

[fetch]
timeout_secs = 30
max_bytes = 16777216
retries = 3

[output]
code_block = true
"#;

/// Handle config subcommand actions.
pub fn handle_config_action(action: ConfigAction) -> Result<(), Box<dyn Error>> {
    match action {
        ConfigAction::Show => {
            let config_path = default_path();
            let config = Config::load(None)?;

            println!("Current configuration:");
            println!("  Width: {}", config.render.width);
            println!(
                "  Charset: {}",
                config
                    .render
                    .charset
                    .as_deref()
                    .unwrap_or(CharSet::default().name())
            );
            if let Some(ramp) = &config.render.ramp {
                println!("  Custom ramp: {:?}", ramp);
            }
            println!("  Invert: {}", if config.render.invert { "yes" } else { "no" });
            println!("  Cell aspect: {}", config.render.cell_aspect);
            println!("  Fetch timeout: {}s", config.fetch.timeout_secs);
            println!("  Download cap: {} bytes", config.fetch.max_bytes);
            println!("  Retries: {}", config.fetch.retries);
            println!(
                "  Code block: {}",
                if config.output.code_block { "yes" } else { "no" }
            );
            println!();

            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found)", config_path.display());
            }
            Ok(())
        }
        ConfigAction::Init => {
            let config_path = default_path();
            if config_path.exists() {
                println!("Config file already exists: {}", config_path.display());
                return Ok(());
            }
            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&config_path, DEFAULT_CONFIG)?;
            println!("Created config file: {}", config_path.display());
            Ok(())
        }
    }
}
