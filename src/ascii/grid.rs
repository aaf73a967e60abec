//! The character grid produced by the glyph mapper.

use std::fmt;

/// ASCII art as `\n`-terminated lines of glyphs.
///
/// Grids built by [`map_to_glyphs`](super::map_to_glyphs) are rectangular:
/// `height` lines of exactly `width` glyphs. Grids parsed from arbitrary text
/// with [`GlyphGrid::from_text`] may be ragged, in which case `width` is the
/// longest line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GlyphGrid {
    text: String,
    width: usize,
    height: usize,
}

impl GlyphGrid {
    /// Assemble a grid from rows of glyphs, terminating each with `\n`.
    pub fn from_rows<I, R>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = char>,
    {
        let mut text = String::new();
        let mut width = 0;
        let mut height = 0;
        for row in rows {
            let mut len = 0;
            for c in row {
                text.push(c);
                len += 1;
            }
            text.push('\n');
            width = width.max(len);
            height += 1;
        }
        Self {
            text,
            width,
            height,
        }
    }

    /// Parse existing ASCII art, e.g. text that was copied out earlier.
    ///
    /// A trailing line terminator is implicit and does not add a row.
    /// `\r\n` endings are accepted.
    pub fn from_text(text: &str) -> Self {
        Self::from_rows(text.lines().map(str::chars))
    }

    /// The full text, each line ending in `\n`.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Lines without their terminators.
    pub fn lines(&self) -> std::str::Lines<'_> {
        self.text.lines()
    }

    /// Longest line length in characters.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of lines.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.height == 0
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for GlyphGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
