use crossterm::style::Stylize;
use std::io::IsTerminal;

/// Whether stderr diagnostics should be colored.
///
/// Respects `--no-color` and the `NO_COLOR` environment variable.
pub fn should_use_color(no_color: bool) -> bool {
    if no_color || std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stderr().is_terminal()
}

/// Prints an error to stderr, one `error:` line per message line.
pub fn print_error(error: &dyn std::error::Error, no_color: bool) {
    let prefix = if should_use_color(no_color) {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    };
    for line in error.to_string().lines() {
        eprintln!("{} {}", prefix, line);
    }
}

/// Prints a notice (such as a clipboard confirmation) unless quiet.
pub fn notice(message: &str, quiet: bool, no_color: bool) {
    if quiet {
        return;
    }
    if should_use_color(no_color) {
        eprintln!("{}", message.green());
    } else {
        eprintln!("{}", message);
    }
}

/// Prints a warning to stderr.
pub fn warning(message: &str, no_color: bool) {
    if should_use_color(no_color) {
        eprintln!("{} {}", "warning:".yellow().bold(), message);
    } else {
        eprintln!("warning: {}", message);
    }
}
