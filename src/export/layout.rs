//! Monospace layout metrics for the PNG export.

/// Default font size in pixels.
pub const FONT_SIZE: f32 = 8.0;

/// Glyph advance as a fraction of font size. Approximates a typical
/// monospace face.
pub const ADVANCE_RATIO: f32 = 0.6;

/// Line pitch as a fraction of font size; tighter than single spacing.
pub const LINE_HEIGHT_RATIO: f32 = 0.8;

/// Longest canvas side the exporter will allocate.
pub const MAX_CANVAS_SIDE: u32 = 32_768;

/// Most pixels the exporter will allocate (256 MiB of RGBA).
pub const MAX_CANVAS_PIXELS: u64 = 1 << 26;

/// Cell metrics used to lay out glyphs on the export canvas.
///
/// These are approximations of real font metrics, not measurements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportLayout {
    pub font_size: f32,
    pub advance_ratio: f32,
    pub line_height_ratio: f32,
}

impl Default for ExportLayout {
    fn default() -> Self {
        Self {
            font_size: FONT_SIZE,
            advance_ratio: ADVANCE_RATIO,
            line_height_ratio: LINE_HEIGHT_RATIO,
        }
    }
}

impl ExportLayout {
    /// Horizontal distance between glyph origins.
    pub fn advance(&self) -> f32 {
        self.font_size * self.advance_ratio
    }

    /// Vertical distance between line tops.
    pub fn line_height(&self) -> f32 {
        self.font_size * self.line_height_ratio
    }

    /// Canvas size for `line_count` lines whose longest has `max_line_len` glyphs.
    ///
    /// Fractional sizes are truncated, and each side is at least 1 pixel so
    /// an empty grid still yields a valid image.
    pub fn canvas_size(&self, max_line_len: usize, line_count: usize) -> (u32, u32) {
        let width = (max_line_len as f32 * self.advance()).floor() as u32;
        let height = (line_count as f32 * self.line_height()).floor() as u32;
        (width.max(1), height.max(1))
    }

    /// Whether a canvas of this size stays within [`MAX_CANVAS_SIDE`] and
    /// [`MAX_CANVAS_PIXELS`].
    pub fn fits(width: u32, height: u32) -> bool {
        width <= MAX_CANVAS_SIDE
            && height <= MAX_CANVAS_SIDE
            && u64::from(width) * u64::from(height) <= MAX_CANVAS_PIXELS
    }

    /// Top-left corner of the cell at `(col, row)`.
    pub fn cell_origin(&self, col: usize, row: usize) -> (f32, f32) {
        (col as f32 * self.advance(), row as f32 * self.line_height())
    }
}
