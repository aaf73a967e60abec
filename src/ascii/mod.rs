//! Glyph mapper: converts pixel buffers to ASCII art.
//!
//! The pipeline is deliberately simple:
//!
//! 1. **Grayscale conversion** - RGB to luma using BT.601 weights
//! 2. **Quantization** - linear mapping of luma onto a 12-glyph ramp
//!
//! Grid sizing for the rasterizer also lives here so the column cap and row
//! scale sit next to the glyphs they describe.

mod charset;
mod dimensions;
mod grayscale;
mod grid;
mod mapping;

pub use charset::{is_ramp_glyph, GLYPH_RAMP, RAMP_LEN};
pub use dimensions::{target_dimensions, target_dimensions_with, MAX_COLUMNS, ROW_SCALE};
pub use grayscale::{luminance, to_grayscale};
pub use grid::GlyphGrid;
pub use mapping::{glyph_for, map_to_glyphs, ramp_index};
