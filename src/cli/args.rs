use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Arguments for rendering Markdown
#[derive(Args, Debug)]
pub struct MarkdownArgs {
    /// Markdown text or file (reads from stdin if not provided)
    pub input: Option<String>,

    /// Print plain text instead of HTML
    #[arg(long, conflicts_with = "pdf")]
    pub text: bool,

    /// Export the rendered document as PDF
    #[arg(long)]
    pub pdf: bool,

    /// PDF output path (defaults to the configured output directory)
    #[arg(short = 'o', long, requires = "pdf")]
    pub output: Option<PathBuf>,
}

/// Arguments for JSON formatting
#[derive(Args, Debug)]
pub struct JsonArgs {
    /// JSON text or file (reads from stdin if not provided)
    pub input: Option<String>,
}

/// Arguments for the JSON/XML to SQL converters
#[derive(Args, Debug)]
pub struct SqlArgs {
    /// Target database (MySQL, PostgreSQL, SQLite, SQLServer, Oracle, MariaDB)
    #[arg(short = 'd', long, value_name = "DBMS")]
    pub dbms: String,

    /// Source document or file (reads from stdin if not provided)
    pub input: Option<String>,
}

/// Arguments for math to LaTeX
#[derive(Args, Debug)]
pub struct MathArgs {
    /// Formula text or file (reads from stdin if not provided)
    pub input: Option<String>,
}

/// Arguments for translation
#[derive(Args, Debug)]
pub struct TranslateArgs {
    /// Source language
    #[arg(short = 'f', long, default_value = "English")]
    pub from: String,

    /// Target language
    #[arg(short = 't', long, default_value = "Spanish")]
    pub to: String,

    /// Swap source and target languages before translating
    #[arg(long)]
    pub swap: bool,

    /// Text or file to translate (reads from stdin if not provided)
    pub input: Option<String>,
}

/// Arguments for info to table
#[derive(Args, Debug)]
pub struct TableArgs {
    /// What the table should organize
    #[arg(long)]
    pub context: String,

    /// Source text or file (reads from stdin if not provided)
    pub input: Option<String>,
}

/// Arguments for image transcription
#[derive(Args, Debug)]
pub struct TranscribeArgs {
    /// URL of the image to transcribe
    pub url: String,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// List features, SQL dialects or languages
    List {
        /// Category to list (all if omitted)
        #[arg(value_enum)]
        category: Option<ConfigCategory>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the resolved settings
    Show,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ConfigCategory {
    Features,
    Dialects,
    Languages,
}
