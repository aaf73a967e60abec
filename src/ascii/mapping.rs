//! Brightness to glyph mapping.

use super::charset::{GLYPH_RAMP, RAMP_LEN};
use super::grayscale::to_grayscale;
use super::grid::GlyphGrid;
use crate::raster::PixelBuffer;

/// Ramp index for a brightness value: `floor(brightness / 255 * 11)`.
///
/// Computed in integers; since 11 and 255 are coprime this matches the
/// floating-point form for every input. Monotonic non-decreasing, with
/// 0 -> 0 and 255 -> 11.
#[inline]
pub fn ramp_index(brightness: u8) -> usize {
    brightness as usize * (RAMP_LEN - 1) / 255
}

/// Glyph for a brightness value.
#[inline]
pub fn glyph_for(brightness: u8) -> char {
    GLYPH_RAMP[ramp_index(brightness)]
}

/// Map every pixel of `buffer` to a glyph.
///
/// The result has `buffer.height()` lines of `buffer.width()` glyphs each,
/// every line terminated by `\n`, even when the width is zero.
/// Deterministic for a given buffer.
///
/// # Example
/// ```
/// use asciify::ascii::map_to_glyphs;
/// use asciify::raster::PixelBuffer;
///
/// let black = PixelBuffer::filled(3, 2, [0, 0, 0, 255]);
/// assert_eq!(map_to_glyphs(&black).as_str(), "@@@\n@@@\n");
/// ```
pub fn map_to_glyphs(buffer: &PixelBuffer) -> GlyphGrid {
    let width = buffer.width() as usize;
    let brightness = to_grayscale(buffer);

    if width == 0 {
        return GlyphGrid::from_rows((0..buffer.height()).map(|_| std::iter::empty::<char>()));
    }

    GlyphGrid::from_rows(
        brightness
            .chunks_exact(width)
            .map(|row| row.iter().map(|&b| glyph_for(b))),
    )
}
