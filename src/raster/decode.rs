//! Decoding image bytes into a pixel buffer at ASCII-grid resolution.

use std::time::{Duration, Instant};

use image::imageops::FilterType;
use image::RgbaImage;

use super::PixelBuffer;
use crate::ascii::target_dimensions;
use crate::error::ConvertError;

/// Advisory upload limit (10 MiB). Never enforced here; callers may warn.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Decode `bytes` and resample to the target grid size.
///
/// The output is `min(60, W0)` columns wide and
/// `floor(W * H0 / W0 * 0.4)` rows tall (at least 1). Resampling is bilinear
/// on premultiplied alpha; fully transparent pixels read back as black.
pub fn rasterize(bytes: &[u8]) -> Result<PixelBuffer, ConvertError> {
    let start = Instant::now();
    let decoded = image::load_from_memory(bytes).map_err(ConvertError::Decode)?;

    let (src_w, src_h) = (decoded.width(), decoded.height());
    let (width, height) = target_dimensions(src_w, src_h)?;
    log::debug!(
        "Rasterizing {}x{} image to {}x{} grid",
        src_w,
        src_h,
        width,
        height
    );

    let mut rgba = decoded.to_rgba8();
    premultiply(&mut rgba);
    let mut resized = if (width, height) == (src_w, src_h) {
        rgba
    } else {
        image::imageops::resize(&rgba, width, height, FilterType::Triangle)
    };
    unpremultiply(&mut resized);

    log::debug!("Rasterized in {:?}", start.elapsed());
    Ok(PixelBuffer::from_rgba_image(resized))
}

/// Scale color channels by alpha so hidden colors cannot bleed into
/// neighbours during resampling.
fn premultiply(image: &mut RgbaImage) {
    for px in image.pixels_mut() {
        let a = px[3] as u16;
        for c in &mut px.0[..3] {
            *c = ((*c as u16 * a + 127) / 255) as u8;
        }
    }
}

/// Inverse of [`premultiply`]. Fully transparent pixels come out as
/// transparent black, the same samples a browser canvas hands back.
fn unpremultiply(image: &mut RgbaImage) {
    for px in image.pixels_mut() {
        let a = px[3] as u16;
        for c in &mut px.0[..3] {
            *c = match a {
                0 => 0,
                255 => *c,
                _ => ((*c as u16 * 255 + a / 2) / a).min(255) as u8,
            };
        }
    }
}

/// Awaitable form of [`rasterize`].
///
/// The decode runs on tokio's blocking pool. With `timeout` set, a decode
/// that takes longer fails with [`ConvertError::DecodeTimeout`]; the blocking
/// work itself still runs to completion in the background.
pub async fn rasterize_async(
    bytes: Vec<u8>,
    timeout: Option<Duration>,
) -> Result<PixelBuffer, ConvertError> {
    let task = tokio::task::spawn_blocking(move || rasterize(&bytes));

    let joined = match timeout {
        Some(limit) => tokio::time::timeout(limit, task)
            .await
            .map_err(|_| ConvertError::DecodeTimeout(limit))?,
        None => task.await,
    };

    joined.map_err(|e| ConvertError::DecodeTask(e.to_string()))?
}
