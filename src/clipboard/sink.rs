//! Clipboard targets for the generated text.

use std::time::Instant;

use super::status::{CopyIndicator, CopyStatus};
use crate::ascii::GlyphGrid;

/// Errors from writing to a clipboard.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(#[source] arboard::Error),

    #[error("Clipboard write failed: {0}")]
    WriteFailed(#[source] arboard::Error),
}

/// Somewhere text can be copied to.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The system clipboard, via `arboard`.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    /// Open the system clipboard. Fails on headless systems.
    pub fn open() -> Result<Self, ClipboardError> {
        let inner = arboard::Clipboard::new().map_err(ClipboardError::Unavailable)?;
        Ok(Self { inner })
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.inner
            .set_text(text)
            .map_err(ClipboardError::WriteFailed)
    }
}

/// Copy `grid` to `sink` and record the outcome on `indicator`.
///
/// An empty grid is ignored and leaves the indicator untouched. The grid
/// itself is never modified, whatever the outcome.
pub fn copy_grid(
    sink: &mut dyn ClipboardSink,
    grid: &GlyphGrid,
    indicator: &mut CopyIndicator,
    now: Instant,
) -> CopyStatus {
    if grid.is_empty() {
        return indicator.status_at(now);
    }

    let result = sink.set_text(grid.as_str());
    if let Err(e) = &result {
        log::warn!("Copy to clipboard failed: {}", e);
    }
    indicator.record(&result, now);
    indicator.status_at(now)
}
