use std::path::Path;

use crate::export::{ExportError, PdfOptions, save_pdf};
use crate::render::{RenderError, markdown};

/// Markdown text and its rendered HTML for one editing session.
///
/// Created empty, updated on every edit and handed explicitly to whoever
/// needs the pair (the editor and the PDF export).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkdownSession {
    markdown: String,
    formatted: String,
}

impl MarkdownSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the Markdown text and re-renders the HTML.
    ///
    /// On error the previous text and HTML are kept.
    pub fn set_markdown(&mut self, markdown: impl Into<String>) -> Result<(), RenderError> {
        let markdown = markdown.into();
        self.formatted = markdown::to_safe_html(&markdown)?;
        self.markdown = markdown;
        Ok(())
    }

    pub fn markdown(&self) -> &str {
        &self.markdown
    }

    pub fn formatted_html(&self) -> &str {
        &self.formatted
    }

    /// Writes the current HTML to a PDF file.
    pub fn export_pdf(&self, options: &PdfOptions, path: &Path) -> Result<(), ExportError> {
        save_pdf(&self.formatted, options, path)
    }
}
