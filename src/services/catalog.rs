//! Catalog store.
//!
//! The single authority over the ordered record list. Every successful
//! mutation is written through to the persistence backend before the
//! in-memory list changes, so a failed write leaves both untouched.

use crate::io::formats::{parse_candidates, parse_snapshot, to_snapshot};
use crate::models::{ImportMode, Record, RecordId, seed_records, validate_fields};
use crate::services::id_generator::IdGenerator;
use crate::services::pending::{ChangeKind, CommitOutcome, PendingChange};
use crate::services::query;
use crate::services::reconcile::reconcile;
use crate::storage::PersistenceBackend;
use crate::{Error, Result};

/// Where the catalog contents came from at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// A persisted snapshot was read and parsed.
    Snapshot,
    /// Nothing usable was stored; the starter records were used.
    Seed,
}

/// In-memory catalog with write-through persistence.
pub struct CatalogStore<P: PersistenceBackend> {
    backend: P,
    key: String,
    records: Vec<Record>,
    ids: IdGenerator,
    revision: u64,
    loaded_from: LoadSource,
}

impl<P: PersistenceBackend> CatalogStore<P> {
    /// Loads the catalog stored under `key`.
    ///
    /// Never fails: a missing, unreadable, or malformed snapshot falls back
    /// to the starter records. Nothing is written until the first mutation.
    pub fn load(backend: P, key: impl Into<String>) -> Self {
        let key = key.into();
        let (records, loaded_from) = match backend.read(&key) {
            Ok(Some(text)) => match parse_snapshot(&text) {
                Ok(records) => (records, LoadSource::Snapshot),
                Err(e) => {
                    tracing::warn!(key = %key, error = %e, "Stored catalog is malformed, using starter records");
                    (seed_records(), LoadSource::Seed)
                },
            },
            Ok(None) => {
                tracing::debug!(key = %key, "No stored catalog, using starter records");
                (seed_records(), LoadSource::Seed)
            },
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Failed to read stored catalog, using starter records");
                (seed_records(), LoadSource::Seed)
            },
        };

        tracing::info!(key = %key, records = records.len(), source = ?loaded_from, "Loaded catalog");

        Self {
            backend,
            key,
            records,
            ids: IdGenerator::new(),
            revision: 0,
            loaded_from,
        }
    }

    /// Replaces the id generator (useful with a fixed clock).
    #[must_use]
    pub fn with_id_generator(mut self, ids: IdGenerator) -> Self {
        self.ids = ids;
        self
    }

    /// Returns the full ordered catalog.
    #[must_use]
    pub fn list(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up a record by id.
    #[must_use]
    pub fn find_by_id(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Case-insensitive substring search over titles and texts.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Record> {
        query::filter(&self.records, query)
    }

    /// Revision counter, bumped on every committed mutation.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Where the catalog was loaded from.
    #[must_use]
    pub const fn loaded_from(&self) -> LoadSource {
        self.loaded_from
    }

    /// The persistence backend.
    #[must_use]
    pub const fn backend(&self) -> &P {
        &self.backend
    }

    /// Appends a new record with a freshly issued id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for a blank title or text, or an error
    /// if the catalog cannot be persisted.
    pub fn create(&mut self, title: impl Into<String>, text: impl Into<String>) -> Result<Record> {
        let title = title.into();
        let text = text.into();
        validate_fields(&title, &text)?;

        let id = self.ids.next_id(&self.records);
        let record = Record::new(id, title, text);

        let mut next = self.records.clone();
        next.push(record.clone());
        self.apply(next)?;

        tracing::info!(id = %record.id, "Created response");
        Ok(record)
    }

    /// Replaces the title and text of an existing record in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for a blank title or text,
    /// [`Error::NotFound`] if no record has `id`, or an error if the catalog
    /// cannot be persisted.
    pub fn update(
        &mut self,
        id: RecordId,
        title: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<Record> {
        let title = title.into();
        let text = text.into();
        validate_fields(&title, &text)?;

        let position = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(Error::NotFound(id))?;

        let mut next = self.records.clone();
        next[position].title = title;
        next[position].text = text;
        let record = next[position].clone();
        self.apply(next)?;

        tracing::info!(id = %id, "Updated response");
        Ok(record)
    }

    /// Computes the removal of `id`.
    pub fn propose_delete(&self, id: RecordId) -> PendingChange {
        PendingChange::new(
            self.revision,
            ChangeKind::Delete {
                id,
                target: self.find_by_id(id).cloned(),
            },
        )
    }

    /// Parses and reconciles backup text without changing anything.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidImport`] if `text` is not a JSON array.
    /// Malformed individual entries do not fail the import; they are listed
    /// in the report instead.
    pub fn propose_import(&self, text: &str, mode: ImportMode) -> Result<PendingChange> {
        let candidates = parse_candidates(text)?;
        let reconciled = reconcile(&self.records, candidates, mode);

        tracing::debug!(
            mode = %mode,
            added = reconciled.report.added,
            quarantined = reconciled.report.quarantined.len(),
            "Prepared import"
        );

        Ok(PendingChange::new(
            self.revision,
            ChangeKind::Import {
                records: reconciled.records,
                report: reconciled.report,
            },
        ))
    }

    /// Computes a reset to the starter records.
    pub fn propose_reset(&self) -> PendingChange {
        PendingChange::new(
            self.revision,
            ChangeKind::Reset {
                records: seed_records(),
                discarded: self.records.len(),
            },
        )
    }

    /// Applies a change returned by one of the `propose_*` methods.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StaleChange`] if the catalog was mutated after the
    /// change was proposed, or an error if the catalog cannot be persisted.
    pub fn commit(&mut self, change: PendingChange) -> Result<CommitOutcome> {
        if change.revision() != self.revision {
            return Err(Error::StaleChange {
                expected: change.revision(),
                actual: self.revision,
            });
        }

        match change.into_kind() {
            ChangeKind::Delete { id, target } => {
                let next: Vec<Record> = self
                    .records
                    .iter()
                    .filter(|r| r.id != id)
                    .cloned()
                    .collect();
                self.apply(next)?;
                tracing::info!(id = %id, removed = target.is_some(), "Deleted response");
                Ok(CommitOutcome::Deleted(target))
            },
            ChangeKind::Import { records, report } => {
                self.apply(records)?;
                tracing::info!(
                    mode = %report.mode,
                    added = report.added,
                    total = report.resulting_len,
                    "Imported backup"
                );
                Ok(CommitOutcome::Imported(report))
            },
            ChangeKind::Reset { records, discarded } => {
                self.apply(records)?;
                tracing::info!(discarded, "Reset catalog to starter responses");
                Ok(CommitOutcome::Reset {
                    len: self.records.len(),
                })
            },
        }
    }

    /// Writes the current catalog to the backend.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self) -> Result<()> {
        self.persist(&self.records)
    }

    fn persist(&self, records: &[Record]) -> Result<()> {
        let snapshot = to_snapshot(records)?;
        self.backend.write(&self.key, &snapshot)
    }

    /// Persists `next`, then makes it the current catalog.
    fn apply(&mut self, next: Vec<Record>) -> Result<()> {
        self.persist(&next).inspect_err(|e| {
            tracing::warn!(key = %self.key, error = %e, "Failed to persist catalog, change discarded");
        })?;
        self.records = next;
        self.revision += 1;
        self.loaded_from = LoadSource::Snapshot;
        Ok(())
    }
}
