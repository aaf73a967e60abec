//! Color themes for the PNG export.

use std::fmt;
use std::str::FromStr;

use image::Rgba;
use serde::Deserialize;

/// Build an opaque color from a `0xRRGGBB` literal.
const fn hex(rgb: u32) -> Rgba<u8> {
    Rgba([(rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8, 0xff])
}

/// Background/foreground pair used when rendering ASCII art to an image.
///
/// The theme only affects the export; the text output is identical for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Green glyphs on near-black, terminal style.
    #[default]
    Dark,
    /// Slate glyphs on white.
    Light,
}

impl Theme {
    pub fn background(&self) -> Rgba<u8> {
        match self {
            Theme::Dark => hex(0x111827),
            Theme::Light => hex(0xffffff),
        }
    }

    pub fn foreground(&self) -> Rgba<u8> {
        match self {
            Theme::Dark => hex(0x22c55e),
            Theme::Light => hex(0x1f2937),
        }
    }

    /// The other theme.
    pub fn toggle(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown theme name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown theme '{0}'. Available themes: dark, light")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            _ => Err(UnknownTheme(s.to_string())),
        }
    }
}
