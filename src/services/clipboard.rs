//! Clipboard integration.
//!
//! Copy is fire-and-forget: a failure is logged and the caller carries on.

use crate::{Error, Result};
use std::io::Write;
use std::process::{Command, Stdio};

/// Something that can place text on the system clipboard.
pub trait ClipboardWriter {
    /// Writes `text` to the clipboard.
    ///
    /// # Errors
    ///
    /// Returns an error if no clipboard is available or the write fails.
    fn write_text(&self, text: &str) -> Result<()>;
}

/// Clipboard backed by an external command that reads stdin.
#[derive(Debug, Clone, Default)]
pub struct SystemClipboard {
    command: Option<Vec<String>>,
}

impl SystemClipboard {
    /// Uses the platform default commands.
    #[must_use]
    pub const fn new() -> Self {
        Self { command: None }
    }

    /// Uses `command` (program followed by arguments) instead of the
    /// platform defaults. An empty list falls back to the defaults.
    #[must_use]
    pub fn with_command(command: Vec<String>) -> Self {
        Self {
            command: (!command.is_empty()).then_some(command),
        }
    }

    /// Candidate commands in the order they are tried.
    #[must_use]
    pub fn candidates(&self) -> Vec<Vec<String>> {
        if let Some(command) = &self.command {
            return vec![command.clone()];
        }
        platform_defaults()
            .iter()
            .map(|argv| argv.iter().map(|s| (*s).to_string()).collect())
            .collect()
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut last_error = None;
        for argv in self.candidates() {
            let program = argv.first().map_or("", String::as_str);
            match run_with_stdin(&argv, text) {
                Ok(()) => {
                    tracing::debug!(program, "Copied to clipboard");
                    return Ok(());
                },
                Err(e) => {
                    tracing::debug!(program, error = %e, "Clipboard command failed");
                    last_error = Some(e);
                },
            }
        }
        Err(last_error
            .unwrap_or_else(|| Error::operation("clipboard", "no clipboard command available")))
    }
}

#[cfg(target_os = "macos")]
const fn platform_defaults() -> &'static [&'static [&'static str]] {
    &[&["pbcopy"]]
}

#[cfg(target_os = "windows")]
const fn platform_defaults() -> &'static [&'static [&'static str]] {
    &[&["clip"]]
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const fn platform_defaults() -> &'static [&'static [&'static str]] {
    &[
        &["wl-copy"],
        &["xclip", "-selection", "clipboard"],
        &["xsel", "--clipboard", "--input"],
    ]
}

fn run_with_stdin(argv: &[String], text: &str) -> Result<()> {
    let Some((program, args)) = argv.split_first() else {
        return Err(Error::operation("clipboard", "empty clipboard command"));
    };

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| Error::operation("spawn_clipboard", format!("{program}: {e}")))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| Error::operation("write_clipboard", e))?;
    }

    let status = child
        .wait()
        .map_err(|e| Error::operation("wait_clipboard", e))?;
    if status.success() {
        Ok(())
    } else {
        Err(Error::operation(
            "clipboard",
            format!("{program} exited with {status}"),
        ))
    }
}

/// Copies `text`, logging instead of failing.
///
/// Returns whether the copy succeeded.
pub fn copy_to_clipboard(writer: &dyn ClipboardWriter, text: &str) -> bool {
    match writer.write_text(text) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to copy to clipboard");
            false
        },
    }
}
