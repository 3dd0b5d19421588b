//! conversors: a content-conversion suite.
//!
//! Every feature (Markdown to HTML, JSON formatting, JSON/XML to SQL, math
//! to LaTeX, translation, info to table, image transcription) is a
//! [`FormSpec`] driven by a [`FormController`]: values are validated, then
//! either rendered locally or posted to the backend through a [`Gateway`],
//! and the reply is turned into a [`RenderedOutput`].

pub mod core;
pub mod export;
pub mod features;
pub mod form;
pub mod gateway;
pub mod render;
pub mod session;

pub use crate::core::config::{ApiSettings, ConfigError, PdfSettings, Settings, SettingsLayer};
pub use export::{
    ClipboardError, ClipboardSink, ExportError, PdfOptions, SystemClipboard, copy_to_clipboard,
    export_to_pdf, save_pdf,
};
pub use features::{Feature, LANGUAGES, SQL_DIALECTS};
pub use form::{FormController, FormSpec, SubmissionResult, ValidationErrors};
pub use gateway::{Gateway, GatewayError, HttpGateway, SubmissionRequest};
pub use render::{RenderError, RenderedOutput, Renderer, Table};
pub use session::MarkdownSession;
