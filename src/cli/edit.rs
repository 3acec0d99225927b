//! Edit command.

use crate::cli::emit;
use crate::models::RecordId;
use crate::services::CatalogStore;
use crate::storage::PersistenceBackend;
use crate::{Error, Result};
use std::io::Write;

/// Updates a response; fields left as `None` keep their current value.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if neither field is given,
/// [`Error::NotFound`] for an unknown id, or [`Error::Validation`] for a
/// blank field.
pub fn execute<P: PersistenceBackend>(
    store: &mut CatalogStore<P>,
    id: RecordId,
    title: Option<String>,
    text: Option<String>,
    out: &mut dyn Write,
) -> Result<()> {
    if title.is_none() && text.is_none() {
        return Err(Error::InvalidInput(
            "nothing to change: pass --title and/or --text".to_string(),
        ));
    }

    let current = store.find_by_id(id).ok_or(Error::NotFound(id))?;
    let title = title.unwrap_or_else(|| current.title.clone());
    let text = text.unwrap_or_else(|| current.text.clone());

    let record = store.update(id, title, text)?;
    emit(out, format!("Updated response {} \"{}\".", record.id, record.title))
}
