use conversors::{ClipboardError, ClipboardSink, SystemClipboard};
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// Hidden subcommand that keeps the clipboard contents alive.
pub const HOLD_COMMAND: &str = "clipboard-hold";

/// Clipboard sink for a process that exits right after copying.
///
/// The text is set immediately (which also checks that a clipboard is
/// available). On Linux it is then handed to a detached
/// `conversors clipboard-hold` child that keeps serving it until another
/// program takes the clipboard.
#[derive(Debug, Default)]
pub struct DetachedClipboard;

impl ClipboardSink for DetachedClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        SystemClipboard.write_text(text)?;
        if cfg!(target_os = "linux") {
            spawn_holder(text)?;
        }
        Ok(())
    }
}

fn spawn_holder(text: &str) -> Result<(), ClipboardError> {
    let exe = std::env::current_exe()?;
    let mut child = holder_command(&exe).spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes())?;
    }
    debug!(pid = child.id(), "clipboard holder started");
    Ok(())
}

fn holder_command(exe: &Path) -> Command {
    let mut command = Command::new(exe);
    command
        .arg(HOLD_COMMAND)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    command
}
