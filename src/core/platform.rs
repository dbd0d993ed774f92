//! Host capabilities needed by the orchestration core.
//!
//! Keeps DOM side effects (download synthesis, clipboard, input reset, the
//! clock) behind one seam so the core runs unchanged in native tests.

use super::error::PlatformError;
use super::selection::Side;

#[allow(async_fn_in_trait)]
pub trait Platform {
    /// Current time in milliseconds since the epoch.
    fn now_ms(&self) -> f64;

    /// Offer `bytes` to the user as a file download named `filename`.
    fn trigger_download(&self, bytes: &[u8], filename: &str, mime: &str)
        -> Result<(), PlatformError>;

    /// Write `text` with the asynchronous clipboard API.
    async fn write_clipboard(&self, text: &str) -> Result<(), PlatformError>;

    /// Legacy clipboard path (off-screen textarea + copy command).
    fn write_clipboard_fallback(&self, text: &str) -> Result<(), PlatformError>;

    /// Clear the native file input of `side` so picking the same file again
    /// fires a fresh change event.
    fn reset_file_input(&self, side: Side);
}
