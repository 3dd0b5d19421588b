//! The conversion features offered by the suite, each described as a form.

use crate::form::{FormSpec, one_of, required, url};
use crate::render::Renderer;

/// SQL dialects accepted by the JSON/XML to SQL forms.
pub const SQL_DIALECTS: &[&str] = &["MySQL", "PostgreSQL", "SQLite", "SQLServer", "Oracle", "MariaDB"];

/// Languages accepted by the translator.
pub const LANGUAGES: &[&str] = &[
    "English",
    "Spanish",
    "French",
    "German",
    "Chinese",
    "Japanese",
    "Portuguese",
];

/// One conversion feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Markdown,
    JsonFormatter,
    JsonToSql,
    XmlToSql,
    MathToLatex,
    Translator,
    InfoToTable,
    ImageTranscription,
}

impl Feature {
    pub const ALL: [Feature; 8] = [
        Feature::Markdown,
        Feature::JsonFormatter,
        Feature::JsonToSql,
        Feature::XmlToSql,
        Feature::MathToLatex,
        Feature::Translator,
        Feature::InfoToTable,
        Feature::ImageTranscription,
    ];

    /// Stable identifier, also the CLI subcommand name.
    pub fn as_str(self) -> &'static str {
        match self {
            Feature::Markdown => "markdown",
            Feature::JsonFormatter => "json",
            Feature::JsonToSql => "json-to-sql",
            Feature::XmlToSql => "xml-to-sql",
            Feature::MathToLatex => "math",
            Feature::Translator => "translate",
            Feature::InfoToTable => "table",
            Feature::ImageTranscription => "transcribe",
        }
    }

    /// The form describing this feature.
    pub fn spec(self) -> FormSpec {
        match self {
            Feature::Markdown => FormSpec::local(self.as_str(), "markdown")
                .title("Markdown to Formatted Text")
                .field("markdown", vec![required("Markdown input is required.")])
                .renderer(Renderer::Markdown)
                .copy_label("Formatted text"),
            Feature::JsonFormatter => FormSpec::local(self.as_str(), "json_input")
                .title("JSON Formatter")
                .field("json_input", vec![required("JSON input is required.")])
                .renderer(Renderer::Json)
                .copy_label("JSON"),
            Feature::JsonToSql => FormSpec::remote(self.as_str(), "/json-to-sql")
                .title("JSON to SQL Converter")
                .field("json_input", vec![required("JSON input is required.")])
                .field("sql_dbms", vec![one_of(SQL_DIALECTS)])
                .renderer(Renderer::Sql)
                .copy_label("SQL")
                .failure_message("Error generating SQL. Please try again."),
            Feature::XmlToSql => FormSpec::remote(self.as_str(), "/xml-to-sql")
                .title("XML to SQL Converter")
                .field("xml_input", vec![required("XML input is required.")])
                .field("sql_dbms", vec![one_of(SQL_DIALECTS)])
                .renderer(Renderer::Sql)
                .copy_label("SQL")
                .failure_message("Error generating SQL. Please try again."),
            Feature::MathToLatex => FormSpec::remote(self.as_str(), "/math-formulas-in-latex")
                .title("Math Formula to LaTeX")
                .field(
                    "formula_input",
                    vec![required("Mathematical formula is required.")],
                )
                .renderer(Renderer::Latex)
                .copy_label("LaTeX")
                .failure_message("Error converting formula. Please try again."),
            Feature::Translator => FormSpec::remote(self.as_str(), "/translator")
                .title("Translation Service")
                .field("text_input", vec![required("Text input is required.")])
                .field("source_language", vec![one_of(LANGUAGES)])
                .field("target_language", vec![one_of(LANGUAGES)])
                .renderer(Renderer::Text)
                .copy_label("Translation")
                .failure_message("Error translating text. Please try again."),
            Feature::InfoToTable => FormSpec::remote(self.as_str(), "/text-to-conceptual-table")
                .title("Info to Table Service")
                .field("text_input", vec![required("Text input is required.")])
                .field("context", vec![required("Context is required.")])
                .renderer(Renderer::Table)
                .copy_label("Table")
                .failure_message("Error generating table. Please try again."),
            Feature::ImageTranscription => FormSpec::remote(self.as_str(), "/image-transcription")
                .title("Image Transcription")
                .field("img_url", vec![url("A valid image URL is required.")])
                .renderer(Renderer::Markdown)
                .copy_label("Transcription")
                .failure_message("Error generating transcription. Please try again."),
        }
    }
}
