//! Clipboard and PDF export helpers.

pub mod clipboard;
pub mod pdf;

pub use clipboard::{ClipboardError, ClipboardSink, SystemClipboard, copy_to_clipboard};
pub use pdf::{ExportError, PdfOptions, export_to_pdf, save_pdf};
