//! Subcommand handlers for convert, render and config actions.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use super::args::{ConfigAction, ConvertArgs, RenderArgs};
use crate::ascii::GlyphGrid;
use crate::clipboard::{CopyStatus, SystemClipboard};
use crate::config::{default_path as get_config_path, Config, ConfigError};
use crate::error::ConvertError;
use crate::export::{export_png, Theme};
use crate::session::Session;

/// Errors surfaced by CLI subcommands.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Read a whole input file, treating `-` as stdin.
fn read_input(path: &Path) -> Result<Vec<u8>, CliError> {
    let read_err = |source: std::io::Error| CliError::Read {
        path: path.to_path_buf(),
        source,
    };
    if path == Path::new("-") {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf).map_err(read_err)?;
        Ok(buf)
    } else {
        std::fs::read(path).map_err(read_err)
    }
}

/// Convert an image, print the art, and optionally export and copy it.
pub async fn run_convert(args: ConvertArgs, config: &Config) -> Result<(), CliError> {
    let bytes = read_input(&args.input)?;
    let theme = args.theme.map(Theme::from).unwrap_or(config.ui.theme);
    let timeout = args
        .timeout
        .map(Duration::from_secs)
        .or_else(|| config.convert.decode_timeout());

    let mut session = Session::new(theme).with_decode_timeout(timeout);
    let grid = session.convert(bytes).await?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(grid.as_str().as_bytes())?;
    stdout.flush()?;

    if let Some(export) = &args.export {
        let dest = export.clone().unwrap_or_else(|| config.export.path.clone());
        if let Some(image) = session.export() {
            let path = image?.write_to(&dest)?;
            eprintln!("Saved {}", path.display());
        }
    }

    if args.copy {
        let status = match SystemClipboard::open() {
            Ok(mut clipboard) => session.copy(&mut clipboard, Instant::now()),
            Err(e) => {
                log::warn!("{}", e);
                CopyStatus::Failed
            }
        };
        eprintln!("{}", status.label());
    }

    Ok(())
}

/// Render an ASCII art text file to PNG.
pub fn run_render(args: RenderArgs, config: &Config) -> Result<(), CliError> {
    let bytes = read_input(&args.input)?;
    let text = String::from_utf8_lossy(&bytes);
    let grid = GlyphGrid::from_text(&text);
    let theme = args.theme.map(Theme::from).unwrap_or(config.ui.theme);

    let image = export_png(&grid, theme)?;
    let dest = args.output.unwrap_or_else(|| config.export.path.clone());
    let path = image.write_to(&dest)?;
    eprintln!(
        "Saved {}x{} image to {}",
        image.width,
        image.height,
        path.display()
    );
    Ok(())
}

/// Handle config subcommand actions.
pub fn handle_config_action(
    action: ConfigAction,
    config: &Config,
    config_path: Option<&Path>,
) -> Result<(), CliError> {
    let config_path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(get_config_path);

    match action {
        ConfigAction::Show => {
            println!("Current configuration:");
            println!("  Theme: {}", config.ui.theme);
            println!("  Export path: {}", config.export.path.display());
            match config.convert.decode_timeout_secs {
                Some(secs) => println!("  Decode timeout: {}s", secs),
                None => println!("  Decode timeout: none"),
            }
            println!();

            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found)", config_path.display());
            }
        }
        ConfigAction::Init => {
            Config::init(&config_path)?;
            println!("Created config file: {}", config_path.display());
        }
    }
    Ok(())
}
