//! List command.

use crate::Result;
use crate::cli::{emit, emit_all};
use crate::rendering::render_list;
use crate::services::CatalogStore;
use crate::storage::PersistenceBackend;
use std::io::Write;

/// Prints every response matching `query` (all of them when `None`).
///
/// # Errors
///
/// Returns an error if output cannot be written.
pub fn execute<P: PersistenceBackend>(
    store: &CatalogStore<P>,
    query: Option<&str>,
    preview_length: usize,
    out: &mut dyn Write,
) -> Result<()> {
    let query = query.unwrap_or_default();
    let matches = store.search(query);

    if matches.is_empty() {
        if store.is_empty() {
            emit(out, "No responses yet. Add one with `quickassist add`.")?;
        } else {
            emit(out, format!("No responses match \"{query}\"."))?;
        }
        return Ok(());
    }

    emit_all(out, render_list(&matches, preview_length))
}
