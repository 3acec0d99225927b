//! CLI command implementations.
//!
//! Each submodule implements one `quickassist` command on top of a
//! [`CatalogStore`](crate::services::CatalogStore). Commands write their
//! output to a caller-supplied writer and ask questions through a
//! [`Confirm`] implementation, so they run unchanged in tests.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `list` | List responses, optionally filtered by a search term |
//! | `show` | Print one response in full |
//! | `add` | Create a response |
//! | `edit` | Change the title and/or text of a response |
//! | `delete` | Delete a response (asks first) |
//! | `copy` | Copy a response's text to the clipboard |
//! | `export` | Write a dated JSON backup |
//! | `import` | Merge or replace the catalog from a backup |
//! | `reset` | Restore the starter responses (asks first) |
//! | `config` | Print the config file location, or the resolved configuration with `--show` |
//!
//! # Example Usage
//!
//! ```bash
//! quickassist add "Greeting" "Hello! How can I help you today?"
//! quickassist list wifi
//! quickassist copy 1703
//! quickassist export -o ~/backups/
//! quickassist import ~/backups/QuickAssist_Backup_2024-03-07.json --mode merge
//! ```

mod add;
mod config;
mod confirm;
mod copy;
mod delete;
mod edit;
mod export;
mod import;
mod list;
mod reset;
mod show;

pub use add::{execute as cmd_add, read_text_source};
pub use config::execute as cmd_config;
pub use confirm::{AssumeYes, Confirm, StdinConfirm};
pub use copy::execute as cmd_copy;
pub use delete::execute as cmd_delete;
pub use edit::execute as cmd_edit;
pub use export::{ExportTarget, execute as cmd_export};
pub use import::{MODE_QUESTION, execute as cmd_import};
pub use list::execute as cmd_list;
pub use reset::execute as cmd_reset;
pub use show::execute as cmd_show;

use crate::{Error, Result};
use std::fmt::Display;
use std::io::{self, Write};

/// Writes one line of command output.
///
/// A closed reader (`quickassist list | head`) is not an error.
pub(crate) fn emit(out: &mut dyn Write, line: impl Display) -> Result<()> {
    match writeln!(out, "{line}") {
        Err(e) if e.kind() != io::ErrorKind::BrokenPipe => {
            Err(Error::operation("write_output", e))
        },
        _ => Ok(()),
    }
}

/// Writes several lines of command output.
pub(crate) fn emit_all<I, L>(out: &mut dyn Write, lines: I) -> Result<()>
where
    I: IntoIterator<Item = L>,
    L: Display,
{
    lines.into_iter().try_for_each(|line| emit(out, line))
}
