//! The glyph ramp used to encode brightness.

/// Glyph ramp ordered from darkest-looking (`@`) to lightest (space).
///
/// Dense glyphs stand in for dark pixels, so the art reads correctly as
/// dark-on-light text.
pub const GLYPH_RAMP: [char; 12] = ['@', '#', 'S', '%', '?', '*', '+', ';', ':', ',', '.', ' '];

/// Number of glyphs in [`GLYPH_RAMP`].
pub const RAMP_LEN: usize = GLYPH_RAMP.len();

/// Whether `c` is one of the ramp glyphs.
pub fn is_ramp_glyph(c: char) -> bool {
    GLYPH_RAMP.contains(&c)
}
