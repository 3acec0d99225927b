//! Reset command.

use crate::Result;
use crate::cli::{Confirm, emit};
use crate::services::{CatalogStore, CommitOutcome};
use crate::storage::PersistenceBackend;
use std::io::Write;

/// Restores the starter responses after confirmation.
///
/// # Errors
///
/// Returns an error if the prompt fails or the catalog cannot be saved.
pub fn execute<P: PersistenceBackend>(
    store: &mut CatalogStore<P>,
    confirm: &mut dyn Confirm,
    out: &mut dyn Write,
) -> Result<()> {
    let change = store.propose_reset();
    if change.requires_confirmation() && !confirm.confirm(&change.summary())? {
        return emit(out, "Cancelled.");
    }

    match store.commit(change)? {
        CommitOutcome::Reset { len } => {
            emit(out, format!("Restored {len} starter responses."))
        },
        _ => Ok(()),
    }
}
