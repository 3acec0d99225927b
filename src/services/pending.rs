//! Pending catalog changes.
//!
//! Destructive operations are split in two steps. A `propose_*` call on the
//! catalog store computes what would happen and returns a [`PendingChange`];
//! the caller asks the user, then hands the change back to
//! [`crate::services::CatalogStore::commit`]. The core never blocks waiting
//! for an answer, and declining is simply dropping the value.

use crate::models::{ImportMode, ImportReport, Record, RecordId};

/// What a pending change will do once committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeKind {
    /// Remove one record.
    Delete {
        /// Id to remove.
        id: RecordId,
        /// The record currently holding that id, if any.
        target: Option<Record>,
    },
    /// Swap in the result of an import.
    Import {
        /// The reconciled catalog.
        records: Vec<Record>,
        /// What the import did.
        report: ImportReport,
    },
    /// Restore the built-in starter records.
    Reset {
        /// The starter records.
        records: Vec<Record>,
        /// Number of records that will be discarded.
        discarded: usize,
    },
}

/// A change computed against one catalog revision, awaiting commit.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a pending change does nothing until it is committed"]
pub struct PendingChange {
    revision: u64,
    kind: ChangeKind,
}

impl PendingChange {
    pub(crate) const fn new(revision: u64, kind: ChangeKind) -> Self {
        Self { revision, kind }
    }

    /// Catalog revision the change was computed against.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// The change itself.
    #[must_use]
    pub const fn kind(&self) -> &ChangeKind {
        &self.kind
    }

    pub(crate) fn into_kind(self) -> ChangeKind {
        self.kind
    }

    /// Whether the user must confirm before committing.
    ///
    /// Deleting an existing record, replacing the catalog, and resetting it
    /// all need a yes. Merges and deletes of unknown ids do not.
    #[must_use]
    pub const fn requires_confirmation(&self) -> bool {
        match &self.kind {
            ChangeKind::Delete { target, .. } => target.is_some(),
            ChangeKind::Import { report, .. } => report.mode.is_destructive(),
            ChangeKind::Reset { .. } => true,
        }
    }

    /// Whether committing would leave the catalog contents unchanged.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        match &self.kind {
            ChangeKind::Delete { target, .. } => target.is_none(),
            ChangeKind::Import { report, .. } => {
                report.mode == ImportMode::Merge && report.added == 0
            },
            ChangeKind::Reset { .. } => false,
        }
    }

    /// One-line description suitable for a confirmation prompt.
    #[must_use]
    pub fn summary(&self) -> String {
        match &self.kind {
            ChangeKind::Delete {
                target: Some(record),
                ..
            } => format!("Delete response {} \"{}\"?", record.id, record.title),
            ChangeKind::Delete { id, target: None } => {
                format!("No response with id {id}; nothing to delete.")
            },
            ChangeKind::Import { report, .. } => match report.mode {
                ImportMode::Merge => format!(
                    "Merge backup: add {} missing responses, keep {} existing.",
                    report.added, report.collisions
                ),
                ImportMode::Replace => format!(
                    "Replace all {} current responses with {} from the backup?",
                    report.discarded, report.added
                ),
            },
            ChangeKind::Reset { discarded, records } => format!(
                "Discard all {discarded} current responses and restore the {} starter responses?",
                records.len()
            ),
        }
    }
}

/// Result of committing a [`PendingChange`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// A delete was applied; carries the removed record, if any.
    Deleted(Option<Record>),
    /// An import was applied.
    Imported(ImportReport),
    /// The starter records were restored.
    Reset {
        /// Catalog size after the reset.
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed_records;

    fn report(mode: ImportMode, added: usize) -> ImportReport {
        ImportReport {
            mode,
            candidates: added,
            added,
            collisions: 0,
            discarded: 3,
            quarantined: Vec::new(),
            resulting_len: 3 + added,
        }
    }

    #[test]
    fn test_delete_confirmation() {
        let record = Record::new(1702, "Projector Fix", "text");
        let change = PendingChange::new(
            0,
            ChangeKind::Delete {
                id: record.id,
                target: Some(record),
            },
        );
        assert!(change.requires_confirmation());
        assert!(!change.is_noop());
        assert_eq!(change.summary(), "Delete response 1702 \"Projector Fix\"?");
    }

    #[test]
    fn test_delete_unknown_is_noop() {
        let change = PendingChange::new(
            0,
            ChangeKind::Delete {
                id: RecordId::new(5),
                target: None,
            },
        );
        assert!(!change.requires_confirmation());
        assert!(change.is_noop());
    }

    #[test]
    fn test_import_confirmation_depends_on_mode() {
        let merge = PendingChange::new(
            0,
            ChangeKind::Import {
                records: Vec::new(),
                report: report(ImportMode::Merge, 0),
            },
        );
        assert!(!merge.requires_confirmation());
        assert!(merge.is_noop());

        let replace = PendingChange::new(
            0,
            ChangeKind::Import {
                records: Vec::new(),
                report: report(ImportMode::Replace, 2),
            },
        );
        assert!(replace.requires_confirmation());
        assert!(replace.summary().contains("Replace all 3"));
    }

    #[test]
    fn test_reset_summary() {
        let change = PendingChange::new(
            4,
            ChangeKind::Reset {
                records: seed_records(),
                discarded: 10,
            },
        );
        assert!(change.requires_confirmation());
        assert_eq!(change.revision(), 4);
        assert!(change.summary().contains("all 10 current"));
    }
}
