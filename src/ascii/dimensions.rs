//! Grid size calculation for the rasterizer.

use crate::error::ConvertError;

/// Widest grid produced, in character columns. Sized for messaging apps.
pub const MAX_COLUMNS: u32 = 60;

/// Vertical compression applied to the row count.
///
/// Monospace cells are taller than they are wide; sampling fewer rows keeps
/// the rendered art from looking stretched.
pub const ROW_SCALE: f64 = 0.4;

/// Grid dimensions for an image of `img_width` x `img_height` pixels.
///
/// Equivalent to [`target_dimensions_with`] using [`MAX_COLUMNS`] and
/// [`ROW_SCALE`].
///
/// # Example
/// ```
/// use asciify::ascii::target_dimensions;
/// assert_eq!(target_dimensions(1000, 500).unwrap(), (60, 12));
/// ```
pub fn target_dimensions(img_width: u32, img_height: u32) -> Result<(u32, u32), ConvertError> {
    target_dimensions_with(img_width, img_height, MAX_COLUMNS, ROW_SCALE)
}

/// Grid dimensions with a custom column cap and row scale.
///
/// Width is `min(max_columns, img_width)`. Height is
/// `floor(width * (img_height / img_width) * row_scale)`, never below 1.
///
/// # Errors
/// [`ConvertError::InvalidImage`] if either image dimension is zero.
pub fn target_dimensions_with(
    img_width: u32,
    img_height: u32,
    max_columns: u32,
    row_scale: f64,
) -> Result<(u32, u32), ConvertError> {
    if img_width == 0 || img_height == 0 {
        return Err(ConvertError::InvalidImage {
            width: img_width,
            height: img_height,
        });
    }

    let width = max_columns.min(img_width).max(1);
    let aspect = img_height as f64 / img_width as f64;
    let height = (width as f64 * aspect * row_scale).floor() as u32;

    Ok((width, height.max(1)))
}
