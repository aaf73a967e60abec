//! Re-rasterizing ASCII art into an exportable PNG.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

use super::glyph::draw_glyph;
use super::layout::ExportLayout;
use super::theme::Theme;
use crate::ascii::GlyphGrid;
use crate::error::ConvertError;

/// File name used for exported images.
pub const EXPORT_FILENAME: &str = "ascii-art.png";

/// Render `grid` with the default layout.
pub fn render_to_image(grid: &GlyphGrid, theme: Theme) -> Result<RgbaImage, ConvertError> {
    render_with_layout(grid, theme, &ExportLayout::default())
}

/// Render `grid` onto a canvas filled with the theme background.
///
/// Lines are drawn top-anchored at `row * line_height`, glyphs at
/// `col * advance`. Glyph boxes are a full `font_size` tall, so with the
/// default line height adjacent rows overlap slightly and later rows paint
/// over earlier ones.
///
/// Fails with [`ConvertError::CanvasTooLarge`] before allocating when the
/// canvas would exceed the export limits.
pub fn render_with_layout(
    grid: &GlyphGrid,
    theme: Theme,
    layout: &ExportLayout,
) -> Result<RgbaImage, ConvertError> {
    let (width, height) = layout.canvas_size(grid.width(), grid.height());
    if !ExportLayout::fits(width, height) {
        return Err(ConvertError::CanvasTooLarge { width, height });
    }
    let mut canvas = RgbaImage::from_pixel(width, height, theme.background());

    let fg = theme.foreground();
    let cell_width = layout.advance();
    let cell_height = layout.font_size;

    for (row, line) in grid.lines().enumerate() {
        for (col, c) in line.chars().enumerate() {
            let (x, y) = layout.cell_origin(col, row);
            draw_glyph(&mut canvas, c, x, y, cell_width, cell_height, fg);
        }
    }

    Ok(canvas)
}

/// A rendered, PNG-encoded export ready to hand to the user.
#[derive(Debug, Clone)]
pub struct ExportImage {
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl ExportImage {
    /// Suggested download name.
    pub fn filename(&self) -> &'static str {
        EXPORT_FILENAME
    }

    /// Write the PNG to `dest`.
    ///
    /// If `dest` is an existing directory, the file is created inside it as
    /// [`EXPORT_FILENAME`]. Returns the path written.
    pub fn write_to(&self, dest: &Path) -> Result<PathBuf, ConvertError> {
        let path = if dest.is_dir() {
            dest.join(EXPORT_FILENAME)
        } else {
            dest.to_path_buf()
        };
        std::fs::write(&path, &self.bytes)?;
        log::info!(
            "Exported {}x{} image to {}",
            self.width,
            self.height,
            path.display()
        );
        Ok(path)
    }
}

/// Render `grid` and encode it as PNG.
pub fn export_png(grid: &GlyphGrid, theme: Theme) -> Result<ExportImage, ConvertError> {
    export_png_with_layout(grid, theme, &ExportLayout::default())
}

pub fn export_png_with_layout(
    grid: &GlyphGrid,
    theme: Theme,
    layout: &ExportLayout,
) -> Result<ExportImage, ConvertError> {
    let canvas = render_with_layout(grid, theme, layout)?;
    let (width, height) = canvas.dimensions();

    let mut bytes = Vec::new();
    PngEncoder::new(Cursor::new(&mut bytes))
        .write_image(canvas.as_raw(), width, height, ExtendedColorType::Rgba8)
        .map_err(ConvertError::Encode)?;

    log::debug!("Encoded {}x{} export ({} bytes)", width, height, bytes.len());
    Ok(ExportImage {
        bytes,
        width,
        height,
    })
}
