//! CLI argument parsing with clap.

use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use super::enums::ThemeArg;

/// Convert images to ASCII art for sharing in chats and terminals
#[derive(Parser, Debug)]
#[command(name = "asciify")]
#[command(version, about = "Convert images to ASCII art", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Print ASCII art for a photo
    asciify convert photo.jpg

    # Also save a themed PNG and copy the text
    asciify convert photo.jpg --export --theme light --copy

    # Turn saved ASCII art back into an image
    asciify render art.txt -o art.png")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Config file path
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert an image to ASCII art and print it
    Convert(ConvertArgs),
    /// Render an ASCII art text file to PNG
    Render(RenderArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(ClapArgs, Debug)]
pub struct ConvertArgs {
    /// Image file to convert ("-" reads stdin)
    pub input: PathBuf,

    /// Theme for the PNG export (default from config)
    #[arg(long, short)]
    pub theme: Option<ThemeArg>,

    /// Also export a PNG; without a value uses the configured path
    #[arg(long, short, num_args = 0..=1, value_name = "PATH")]
    pub export: Option<Option<PathBuf>>,

    /// Copy the ASCII art to the system clipboard
    #[arg(long)]
    pub copy: bool,

    /// Abort decoding after this many seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

#[derive(ClapArgs, Debug)]
pub struct RenderArgs {
    /// ASCII art text file ("-" reads stdin)
    pub input: PathBuf,

    /// Theme for the image (default from config)
    #[arg(long, short)]
    pub theme: Option<ThemeArg>,

    /// Output path (default from config)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
