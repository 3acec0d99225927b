//! Delete command.
//!
//! Deleting an existing response asks for confirmation first; declining
//! leaves the catalog and the stored snapshot untouched.
//!
//! # Usage
//!
//! ```bash
//! quickassist delete 1702
//!
//! # Skip confirmation
//! quickassist delete --yes 1702
//! ```

use crate::Result;
use crate::cli::{Confirm, emit};
use crate::models::RecordId;
use crate::services::{CatalogStore, CommitOutcome};
use crate::storage::PersistenceBackend;
use std::io::Write;

/// Deletes `id` after confirmation.
///
/// # Errors
///
/// Returns an error if the prompt fails or the catalog cannot be saved.
pub fn execute<P: PersistenceBackend>(
    store: &mut CatalogStore<P>,
    id: RecordId,
    confirm: &mut dyn Confirm,
    out: &mut dyn Write,
) -> Result<()> {
    let change = store.propose_delete(id);

    if change.requires_confirmation() && !confirm.confirm(&change.summary())? {
        return emit(out, "Cancelled.");
    }

    match store.commit(change)? {
        CommitOutcome::Deleted(Some(record)) => emit(
            out,
            format!("Deleted response {} \"{}\".", record.id, record.title),
        ),
        _ => emit(out, format!("No response with id {id}; nothing deleted.")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::testing::{ScriptedConfirm, output, store};

    #[test]
    fn test_delete_confirmed() {
        let mut store = store();
        let mut confirm = ScriptedConfirm::new(&[true]);
        let mut out = Vec::new();
        execute(&mut store, RecordId::new(1702), &mut confirm, &mut out).unwrap();

        assert_eq!(confirm.asked, vec!["Delete response 1702 \"Projector Fix\"?"]);
        assert_eq!(store.len(), 2);
        assert_eq!(output(out), "Deleted response 1702 \"Projector Fix\".\n");
    }

    #[test]
    fn test_delete_declined() {
        let mut store = store();
        let mut confirm = ScriptedConfirm::new(&[false]);
        let mut out = Vec::new();
        execute(&mut store, RecordId::new(1702), &mut confirm, &mut out).unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.revision(), 0);
        assert_eq!(output(out), "Cancelled.\n");
    }

    #[test]
    fn test_delete_unknown_does_not_ask() {
        let mut store = store();
        let mut confirm = ScriptedConfirm::default();
        let mut out = Vec::new();
        execute(&mut store, RecordId::new(5), &mut confirm, &mut out).unwrap();

        assert!(confirm.asked.is_empty());
        assert_eq!(store.len(), 3);
        assert_eq!(output(out), "No response with id 5; nothing deleted.\n");
    }
}
