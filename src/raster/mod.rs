//! Rasterizer: image bytes in, fixed-resolution RGBA pixel buffer out.

mod buffer;
mod decode;

pub use buffer::{PixelBuffer, CHANNELS};
pub use decode::{rasterize, rasterize_async, MAX_UPLOAD_BYTES};
