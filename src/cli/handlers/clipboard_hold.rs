use conversors::SystemClipboard;
use std::io::{self, Read};

/// Reads the text from stdin and serves it until the clipboard changes hands.
pub fn handle() -> Result<(), Box<dyn std::error::Error>> {
    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    SystemClipboard::hold_text(&text)?;
    Ok(())
}
