use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::cli::global::GlobalArgs;

/// Reads a command's input.
///
/// An argument naming an existing file is read from disk; any other
/// argument is taken literally. Without an argument stdin is read.
pub fn read_input(
    input: Option<&str>,
    global: &GlobalArgs,
) -> Result<String, Box<dyn std::error::Error>> {
    let text = match input {
        Some(arg) if Path::new(arg).is_file() => {
            let size = fs::metadata(arg)?.len() as usize;
            check_size(size, "File", global)?;
            return Ok(fs::read_to_string(arg)?);
        }
        Some(arg) => arg.to_string(),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    check_size(text.len(), "Input", global)?;
    Ok(text)
}

fn check_size(
    size: usize,
    what: &str,
    global: &GlobalArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    if global.max_size == 0 || size <= global.max_size {
        return Ok(());
    }
    if global.force {
        if !global.quiet {
            eprintln!(
                "Warning: Processing large input ({} bytes, limit: {} bytes)",
                size, global.max_size
            );
        }
        return Ok(());
    }
    Err(format!(
        "{} size ({} bytes) exceeds limit ({} bytes). Use --force to process anyway.",
        what, size, global.max_size
    )
    .into())
}
