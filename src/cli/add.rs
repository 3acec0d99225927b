//! Add command.

use crate::cli::emit;
use crate::io::traits::is_stdout;
use crate::services::CatalogStore;
use crate::storage::PersistenceBackend;
use crate::{Error, Result};
use std::io::{Read, Write};
use std::path::Path;

/// Creates a response and prints its id.
///
/// # Errors
///
/// Returns [`Error::Validation`] for blank fields, or an error if the
/// catalog cannot be saved.
pub fn execute<P: PersistenceBackend>(
    store: &mut CatalogStore<P>,
    title: String,
    text: String,
    out: &mut dyn Write,
) -> Result<()> {
    let record = store.create(title, text)?;
    emit(out, format!("Added response {} \"{}\".", record.id, record.title))
}

/// Reads response text from a file, or from stdin when `path` is `-`.
///
/// One trailing newline is stripped.
///
/// # Errors
///
/// Returns an error if the source cannot be read.
pub fn read_text_source(path: &Path) -> Result<String> {
    let mut text = if is_stdout(path) {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| Error::operation("read_stdin", e))?;
        buf
    } else {
        std::fs::read_to_string(path)
            .map_err(|e| Error::operation("read_text_file", format!("{}: {e}", path.display())))?
    };

    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}
