//! Conversion session: the state a front end keeps between user actions.
//!
//! Holds the latest ASCII art, the selected theme, whether a conversion is
//! running, and the copy-status indicator. A conversion is split into
//! [`Session::begin`] and [`Session::finish`] so a front end can show the
//! loading state while the decode runs. At most one is in flight per session.

use std::time::{Duration, Instant};

use crate::ascii::{map_to_glyphs, GlyphGrid};
use crate::clipboard::{copy_grid, ClipboardSink, CopyIndicator, CopyStatus};
use crate::error::ConvertError;
use crate::export::{export_png, ExportImage, Theme};
use crate::raster::{rasterize, rasterize_async, MAX_UPLOAD_BYTES};

/// Decode and map an image in one step.
pub fn convert(bytes: &[u8]) -> Result<GlyphGrid, ConvertError> {
    let buffer = rasterize(bytes)?;
    Ok(map_to_glyphs(&buffer))
}

/// Awaitable form of [`convert`].
pub async fn convert_async(
    bytes: Vec<u8>,
    timeout: Option<Duration>,
) -> Result<GlyphGrid, ConvertError> {
    let buffer = rasterize_async(bytes, timeout).await?;
    Ok(map_to_glyphs(&buffer))
}

/// A decode handed out by [`Session::begin`], independent of the session borrow.
#[derive(Debug)]
pub struct PendingConversion {
    bytes: Vec<u8>,
    timeout: Option<Duration>,
}

impl PendingConversion {
    pub async fn run(self) -> Result<GlyphGrid, ConvertError> {
        convert_async(self.bytes, self.timeout).await
    }
}

#[derive(Debug, Default)]
pub struct Session {
    grid: Option<GlyphGrid>,
    theme: Theme,
    loading: bool,
    copy: CopyIndicator,
    decode_timeout: Option<Duration>,
}

impl Session {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Default::default()
        }
    }

    /// Limit how long a single decode may take.
    pub fn with_decode_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.decode_timeout = timeout;
        self
    }

    /// Start a conversion: marks the session as loading and clears the
    /// copy indicator.
    ///
    /// Returns `None` while another conversion is still loading.
    pub fn begin(&mut self, bytes: Vec<u8>) -> Option<PendingConversion> {
        if self.loading {
            log::debug!("Conversion already in progress, ignoring new input");
            return None;
        }
        if bytes.len() > MAX_UPLOAD_BYTES {
            log::warn!(
                "Input is {} bytes, above the advisory {} byte limit",
                bytes.len(),
                MAX_UPLOAD_BYTES
            );
        }

        self.loading = true;
        self.copy.reset();
        Some(PendingConversion {
            bytes,
            timeout: self.decode_timeout,
        })
    }

    /// Complete a conversion started with [`Session::begin`].
    ///
    /// Stores the art on success. On failure the previous art is kept and
    /// the error is returned. The loading flag is cleared either way.
    pub fn finish(
        &mut self,
        result: Result<GlyphGrid, ConvertError>,
    ) -> Result<&GlyphGrid, ConvertError> {
        self.loading = false;
        let grid = result?;
        log::debug!("Converted to {}x{} grid", grid.width(), grid.height());
        Ok(&*self.grid.insert(grid))
    }

    /// Convert an uploaded image, replacing the current art on success.
    ///
    /// Shorthand for [`Session::begin`], [`PendingConversion::run`] and
    /// [`Session::finish`].
    pub async fn convert(&mut self, bytes: Vec<u8>) -> Result<&GlyphGrid, ConvertError> {
        let Some(pending) = self.begin(bytes) else {
            return Err(ConvertError::Busy);
        };
        let result = pending.run().await;
        self.finish(result)
    }

    pub fn grid(&self) -> Option<&GlyphGrid> {
        self.grid.as_ref()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggle();
        self.theme
    }

    /// Render the current art with the current theme. `None` if there is no art yet.
    pub fn export(&self) -> Option<Result<ExportImage, ConvertError>> {
        self.grid.as_ref().map(|grid| export_png(grid, self.theme))
    }

    /// Copy the current art to `sink`. Does nothing when there is no art.
    pub fn copy(&mut self, sink: &mut dyn ClipboardSink, now: Instant) -> CopyStatus {
        match &self.grid {
            Some(grid) => copy_grid(sink, grid, &mut self.copy, now),
            None => self.copy.status_at(now),
        }
    }

    /// Copy-status label as it should read at `now`.
    pub fn copy_status(&self, now: Instant) -> CopyStatus {
        self.copy.status_at(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png_of(color: [u8; 4], w: u32, h: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(w, h, Rgba(color));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_convert_blocking() {
        let grid = convert(&png_of([0, 0, 0, 255], 1, 1)).unwrap();
        assert_eq!(grid.as_str(), "@\n");
    }

    #[tokio::test]
    async fn test_session_convert_stores_grid() {
        let mut session = Session::new(Theme::Dark);
        let grid = session.convert(png_of([255, 255, 255, 255], 10, 25)).await.unwrap();
        assert_eq!((grid.width(), grid.height()), (10, 10));
        assert!(!session.is_loading());
        assert!(session.grid().is_some());
    }

    #[tokio::test]
    async fn test_failed_convert_keeps_previous_grid() {
        let mut session = Session::new(Theme::Dark);
        session.convert(png_of([0, 0, 0, 255], 2, 5)).await.unwrap();
        let before = session.grid().cloned();

        let err = session.convert(b"not an image".to_vec()).await.unwrap_err();
        assert!(matches!(err, ConvertError::Decode(_)));
        assert_eq!(session.grid().cloned(), before);
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn test_loading_visible_between_begin_and_finish() {
        let mut session = Session::new(Theme::Dark);
        let pending = session.begin(png_of([0, 0, 0, 255], 4, 10)).unwrap();
        assert!(session.is_loading());
        assert!(session.begin(png_of([0, 0, 0, 255], 1, 1)).is_none());

        let result = pending.run().await;
        let grid = session.finish(result).unwrap();
        assert_eq!(grid.as_str(), "@@@@\n@@@@\n@@@@\n@@@@\n");
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn test_convert_while_loading_is_busy() {
        let mut session = Session::new(Theme::Dark);
        let _pending = session.begin(png_of([0, 0, 0, 255], 1, 1)).unwrap();
        let err = session.convert(png_of([0, 0, 0, 255], 1, 1)).await.unwrap_err();
        assert!(matches!(err, ConvertError::Busy));
        assert!(session.is_loading());
        assert!(session.grid().is_none());
    }

    #[test]
    fn test_failed_finish_clears_loading() {
        let mut session = Session::new(Theme::Dark);
        let _pending = session.begin(Vec::new()).unwrap();
        let err = session
            .finish(Err(ConvertError::DecodeTask("cancelled".to_string())))
            .unwrap_err();
        assert!(matches!(err, ConvertError::DecodeTask(_)));
        assert!(!session.is_loading());
        assert!(session.grid().is_none());
    }

    #[tokio::test]
    async fn test_convert_resets_copy_status() {
        let mut session = Session::new(Theme::Light);
        session.convert(png_of([0, 0, 0, 255], 3, 8)).await.unwrap();
        let now = Instant::now();
        let mut sink = MemoryClipboard::default();
        assert_eq!(session.copy(&mut sink, now), CopyStatus::Copied);

        session.convert(png_of([0, 0, 0, 255], 3, 8)).await.unwrap();
        assert_eq!(session.copy_status(now), CopyStatus::Idle);
    }

    #[test]
    fn test_export_and_copy_without_grid() {
        let mut session = Session::default();
        assert!(session.export().is_none());
        let mut sink = MemoryClipboard::default();
        assert_eq!(session.copy(&mut sink, Instant::now()), CopyStatus::Idle);
        assert!(sink.text.is_none());
    }

    #[test]
    fn test_toggle_theme() {
        let mut session = Session::new(Theme::Dark);
        assert_eq!(session.toggle_theme(), Theme::Light);
        assert_eq!(session.theme(), Theme::Light);
    }

    #[tokio::test]
    async fn test_export_uses_session_theme() {
        let mut session = Session::new(Theme::Light);
        session.convert(png_of([0, 0, 0, 255], 4, 10)).await.unwrap();
        let export = session.export().unwrap().unwrap();
        let decoded = image::load_from_memory(&export.bytes).unwrap().to_rgba8();
        assert!(decoded
            .pixels()
            .any(|p| *p == Theme::Light.foreground()));
    }
}
