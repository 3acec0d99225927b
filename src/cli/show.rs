//! Show command.

use crate::cli::emit_all;
use crate::models::RecordId;
use crate::rendering::render_full;
use crate::services::CatalogStore;
use crate::storage::PersistenceBackend;
use crate::{Error, Result};
use std::io::Write;

/// Prints one response in full.
///
/// # Errors
///
/// Returns [`Error::NotFound`] for an unknown id.
pub fn execute<P: PersistenceBackend>(
    store: &CatalogStore<P>,
    id: RecordId,
    out: &mut dyn Write,
) -> Result<()> {
    let record = store.find_by_id(id).ok_or(Error::NotFound(id))?;
    emit_all(out, render_full(record))
}
