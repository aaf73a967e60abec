//! Reverse renderer: turns ASCII art back into a themed PNG.

mod glyph;
mod layout;
mod render;
mod theme;

pub use glyph::{bitmap, draw_glyph};
pub use layout::{
    ExportLayout, ADVANCE_RATIO, FONT_SIZE, LINE_HEIGHT_RATIO, MAX_CANVAS_PIXELS, MAX_CANVAS_SIDE,
};
pub use render::{
    export_png, export_png_with_layout, render_to_image, render_with_layout, ExportImage,
    EXPORT_FILENAME,
};
pub use theme::{Theme, UnknownTheme};
