//! Result renderers: turn a form's raw content into displayable output.

pub mod html_text;
pub mod json;
pub mod latex;
pub mod markdown;
pub mod table;

use thiserror::Error;

pub use table::Table;

/// Errors produced while rendering content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
    #[error("Failed to render markdown: {0}")]
    Markdown(String),
}

/// How a form's content is turned into output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Renderer {
    /// Markdown compiled to sanitized HTML
    Markdown,
    /// JSON pretty-printed with 2-space indentation
    Json,
    /// SQL shown verbatim in a fenced block
    Sql,
    /// LaTeX with fences and brackets stripped
    Latex,
    /// Pipe table parsed into rows
    Table,
    /// Text shown as-is
    Text,
}

/// Output derived from one successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedOutput {
    Html(String),
    Json(String),
    Sql(String),
    Latex(String),
    Table(Table),
    Text(String),
}

impl Renderer {
    pub fn render(self, content: &str) -> Result<RenderedOutput, RenderError> {
        Ok(match self {
            Renderer::Markdown => RenderedOutput::Html(markdown::to_safe_html(content)?),
            Renderer::Json => RenderedOutput::Json(json::format(content)?),
            Renderer::Sql => RenderedOutput::Sql(latex::strip_code_fence(content).to_string()),
            Renderer::Latex => RenderedOutput::Latex(latex::strip_latex(content)),
            Renderer::Table => RenderedOutput::Table(Table::parse(content)),
            Renderer::Text => RenderedOutput::Text(content.to_string()),
        })
    }
}

impl RenderedOutput {
    /// What a clipboard copy of this output contains.
    pub fn plain_text(&self) -> String {
        match self {
            RenderedOutput::Html(html) => html_text::plain_text(html),
            RenderedOutput::Json(text)
            | RenderedOutput::Sql(text)
            | RenderedOutput::Latex(text)
            | RenderedOutput::Text(text) => text.clone(),
            RenderedOutput::Table(table) => table.to_markdown(),
        }
    }

    /// Terminal presentation: HTML as markup, SQL fenced, tables aligned.
    pub fn display(&self) -> String {
        match self {
            RenderedOutput::Html(html) => html.trim_end().to_string(),
            RenderedOutput::Sql(sql) => format!("```sql\n{}\n```", sql),
            RenderedOutput::Table(table) => table.to_string(),
            RenderedOutput::Json(text) | RenderedOutput::Latex(text) | RenderedOutput::Text(text) => {
                text.clone()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sql_is_fenced_for_display() {
        let out = Renderer::Sql.render("CREATE TABLE t (id INT);").unwrap();
        assert_eq!(out.display(), "```sql\nCREATE TABLE t (id INT);\n```");
        assert_eq!(out.plain_text(), "CREATE TABLE t (id INT);");
    }

    #[test]
    fn test_sql_reply_already_fenced() {
        let out = Renderer::Sql.render("```sql\nSELECT 1;\n```").unwrap();
        assert_eq!(out, RenderedOutput::Sql("SELECT 1;".to_string()));
    }

    #[test]
    fn test_latex_renderer() {
        let out = Renderer::Latex.render("```latex\n[x^2]\n```").unwrap();
        assert_eq!(out, RenderedOutput::Latex("x^2".to_string()));
    }

    #[test]
    fn test_text_is_verbatim() {
        let out = Renderer::Text.render("  Hola\n").unwrap();
        assert_eq!(out.display(), "  Hola\n");
    }

    #[test]
    fn test_markdown_plain_text() {
        let out = Renderer::Markdown.render("# Cat\n\nA *small* cat.").unwrap();
        assert_eq!(out.plain_text(), "Cat\nA small cat.");
    }

    #[test]
    fn test_json_error_propagates() {
        assert!(matches!(
            Renderer::Json.render("{"),
            Err(RenderError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_table_plain_text_is_markdown() {
        let out = Renderer::Table.render("| a | b |\n|---|---|\n| 1 | 2 |").unwrap();
        assert_eq!(out.plain_text(), "| a   | b   |\n| --- | --- |\n| 1   | 2   |\n");
    }
}
