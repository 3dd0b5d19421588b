use thiserror::Error;
use tracing::debug;

/// Notice shown when there is no output to copy.
pub const NOTHING_TO_COPY: &str = "Nothing to copy!";

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("failed to start clipboard holder: {0}")]
    Holder(#[from] std::io::Error),
}

impl From<arboard::Error> for ClipboardError {
    fn from(e: arboard::Error) -> Self {
        ClipboardError::Unavailable(e.to_string())
    }
}

/// Destination for copied text.
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The system clipboard.
///
/// On Linux (X11 and Wayland) the process that sets the clipboard also
/// serves it, so the text disappears when that process exits unless a
/// clipboard manager takes it over. Short-lived programs should keep a
/// process running [`SystemClipboard::hold_text`].
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    /// Sets the clipboard and, on Linux, blocks until another program
    /// replaces its contents.
    pub fn hold_text(text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = arboard::Clipboard::new()?;

        #[cfg(target_os = "linux")]
        {
            use arboard::SetExtLinux;
            clipboard.set().wait().text(text)?;
        }
        #[cfg(not(target_os = "linux"))]
        clipboard.set_text(text)?;

        debug!(chars = text.len(), "clipboard released");
        Ok(())
    }
}

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text)?;
        debug!(chars = text.len(), "copied to clipboard");
        Ok(())
    }
}

/// Copies `text` and returns the notice to show the user.
///
/// Empty text is not written; the "nothing to copy" notice is returned
/// instead.
pub fn copy_to_clipboard<S: ClipboardSink>(
    sink: &mut S,
    text: &str,
    copied_notice: &str,
) -> Result<String, ClipboardError> {
    if text.is_empty() {
        return Ok(NOTHING_TO_COPY.to_string());
    }
    sink.write_text(text)?;
    Ok(copied_notice.to_string())
}
