//! asciify library crate.
//!
//! Converts raster images to ASCII art and renders ASCII art back to PNG.
//!
//! ```text
//! image bytes -> raster::rasterize -> PixelBuffer
//!             -> ascii::map_to_glyphs -> GlyphGrid (text)
//!             -> export::export_png -> ExportImage (PNG bytes)
//! ```

pub mod ascii;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod export;
pub mod raster;
pub mod session;

pub use ascii::{map_to_glyphs, GlyphGrid, GLYPH_RAMP};
pub use error::ConvertError;
pub use export::{export_png, render_to_image, ExportImage, Theme};
pub use raster::{rasterize, rasterize_async, PixelBuffer};
pub use session::{convert, convert_async, PendingConversion, Session};
