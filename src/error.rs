//! Error types for conversion and export.

use std::time::Duration;

/// Errors that can occur while turning an image into ASCII art or back.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The input bytes are not a decodable image.
    #[error("Could not decode image: {0}")]
    Decode(#[source] image::ImageError),

    /// The image decoded but has no pixels along one axis.
    #[error("Image has invalid dimensions {width}x{height}")]
    InvalidImage { width: u32, height: u32 },

    /// A pixel buffer's length does not match `width * height * 4`.
    #[error("Pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    #[error("Image decode did not finish within {0:?}")]
    DecodeTimeout(Duration),

    /// The background decode task panicked or was cancelled.
    #[error("Image decode task failed: {0}")]
    DecodeTask(String),

    /// A conversion was requested while another is still loading.
    #[error("A conversion is already in progress")]
    Busy,

    /// The export canvas for this art would exceed the allowed size.
    #[error("Export canvas {width}x{height} is too large")]
    CanvasTooLarge { width: u32, height: u32 },

    #[error("Could not encode PNG: {0}")]
    Encode(#[source] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConvertError {
    /// True for failures caused by the input itself rather than the environment.
    ///
    /// The caller should ask for a different file; retrying the same bytes
    /// will fail the same way.
    pub fn is_bad_input(&self) -> bool {
        matches!(
            self,
            ConvertError::Decode(_)
                | ConvertError::InvalidImage { .. }
                | ConvertError::CanvasTooLarge { .. }
        )
    }
}
