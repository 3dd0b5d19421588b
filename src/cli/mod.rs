mod args;
mod clipboard;
mod global;
mod handlers;
mod input;
mod output;

use clap::{Parser, Subcommand};
use conversors::Settings;
use conversors::core::config::{ApiLayer, SettingsLayer};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use args::{
    ConfigAction, JsonArgs, MarkdownArgs, MathArgs, SqlArgs, TableArgs, TranscribeArgs,
    TranslateArgs,
};
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "conversors")]
#[command(version)]
#[command(about = "Content conversion suite: Markdown, JSON, SQL, LaTeX, translation, tables and image transcription", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render Markdown to sanitized HTML, text or PDF
    Markdown(MarkdownArgs),

    /// Pretty-print JSON
    Json(JsonArgs),

    /// Generate SQL from a JSON document
    JsonToSql(SqlArgs),

    /// Generate SQL from an XML document
    XmlToSql(SqlArgs),

    /// Convert a math formula to LaTeX
    Math(MathArgs),

    /// Translate text between languages
    Translate(TranslateArgs),

    /// Organize text into a table
    Table(TableArgs),

    /// Transcribe the text in an image
    Transcribe(TranscribeArgs),

    /// Inspect settings and supported values
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Serve clipboard text read from stdin until another program replaces it
    #[command(name = clipboard::HOLD_COMMAND, hide = true)]
    ClipboardHold,
}

/// Parses the command line, runs the command and reports any error.
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.global);

    match dispatch(cli.command, &cli.global) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error(e.as_ref(), cli.global.no_color);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(global: &GlobalArgs) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(global.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn dispatch(command: Commands, global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    if let Commands::ClipboardHold = command {
        return handlers::clipboard_hold::handle();
    }
    let settings = resolve_settings(global)?;

    match command {
        Commands::Markdown(args) => handlers::markdown::handle(args, global, &settings),
        Commands::Json(args) => handlers::json::handle(args, global, &settings),
        Commands::JsonToSql(args) => handlers::sql::handle_json(args, global, &settings),
        Commands::XmlToSql(args) => handlers::sql::handle_xml(args, global, &settings),
        Commands::Math(args) => handlers::math::handle(args, global, &settings),
        Commands::Translate(args) => handlers::translate::handle(args, global, &settings),
        Commands::Table(args) => handlers::table::handle(args, global, &settings),
        Commands::Transcribe(args) => handlers::transcribe::handle(args, global, &settings),
        Commands::Config { action } => handlers::config::handle(action, global, &settings),
        Commands::ClipboardHold => handlers::clipboard_hold::handle(),
    }
}

/// Layered settings with the command-line overrides applied last.
fn resolve_settings(global: &GlobalArgs) -> Result<Settings, Box<dyn std::error::Error>> {
    let mut settings = Settings::load_with_overrides()?;
    settings.merge(SettingsLayer {
        api: ApiLayer {
            base_url: global.api_base.clone(),
            api_key: global.api_key.clone(),
            timeout_secs: None,
        },
        ..SettingsLayer::default()
    });
    Ok(settings)
}
