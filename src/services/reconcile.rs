//! Import reconciliation.
//!
//! Combines the current catalog with a validated candidate list. This module
//! is pure: it never prompts, never persists, and never mutates its inputs.
//! The catalog store applies the result and writes it out exactly once.

use crate::io::CandidateSet;
use crate::models::{ImportMode, ImportReport, Record, RecordId};
use std::collections::HashSet;

/// A reconciled catalog together with its report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// The catalog as it will look once committed.
    pub records: Vec<Record>,
    /// What the import did.
    pub report: ImportReport,
}

/// Reconciles `current` with `candidates` under `mode`.
#[must_use]
pub fn reconcile(current: &[Record], candidates: CandidateSet, mode: ImportMode) -> Reconciliation {
    let CandidateSet {
        records: incoming,
        quarantined,
        total,
    } = candidates;

    let (records, added, collisions, discarded) = match mode {
        ImportMode::Merge => {
            let (records, added, collisions) = merge(current, incoming);
            (records, added, collisions, 0)
        },
        ImportMode::Replace => {
            let added = incoming.len();
            (replace(incoming), added, 0, current.len())
        },
    };

    let report = ImportReport {
        mode,
        candidates: total,
        added,
        collisions,
        discarded,
        quarantined,
        resulting_len: records.len(),
    };

    Reconciliation { records, report }
}

/// Appends every candidate whose id is not already in `current`.
///
/// Existing records always win; there is no field-level merge. Returns the
/// merged catalog, the number of records added and the number dropped.
#[must_use]
pub fn merge(current: &[Record], candidates: Vec<Record>) -> (Vec<Record>, usize, usize) {
    let existing: HashSet<RecordId> = current.iter().map(|r| r.id).collect();
    let offered = candidates.len();

    let mut records = current.to_vec();
    records.extend(candidates.into_iter().filter(|r| !existing.contains(&r.id)));

    let added = records.len() - current.len();
    (records, added, offered - added)
}

/// Discards the current catalog in favour of `candidates`.
#[must_use]
pub fn replace(candidates: Vec<Record>) -> Vec<Record> {
    candidates
}
