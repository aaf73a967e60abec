//! RGB to brightness conversion using the ITU-R BT.601 luma weights.

use crate::raster::PixelBuffer;

/// Luma of a single RGB sample: `round(0.299*R + 0.587*G + 0.114*B)`.
///
/// Rounds half away from zero, so the result always lands in `0..=255`.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    let y = 0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64;
    y.round().min(255.0) as u8
}

/// Convert an RGBA buffer to one brightness value per pixel.
///
/// Alpha is not weighted. Buffers from the rasterizer already carry
/// black for fully transparent pixels.
pub fn to_grayscale(buffer: &PixelBuffer) -> Vec<u8> {
    let pixel_count = buffer.width() as usize * buffer.height() as usize;
    let mut gray = Vec::with_capacity(pixel_count);

    for rgba in buffer.data().chunks_exact(4) {
        gray.push(luminance(rgba[0], rgba[1], rgba[2]));
    }

    gray
}
