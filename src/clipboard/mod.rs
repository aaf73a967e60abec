//! Copying ASCII art to a clipboard with transient status feedback.

mod sink;
mod status;

pub use sink::{copy_grid, ClipboardError, ClipboardSink, SystemClipboard};
pub use status::{CopyIndicator, CopyStatus, STATUS_RESET};

#[cfg(test)]
pub(crate) use sink::tests::MemoryClipboard;
