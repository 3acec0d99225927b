//! Import validation.
//!
//! Backup files are untrusted input. Every array element is checked against
//! the record contract before it can reach the catalog; elements that fail
//! are quarantined and reported instead of being admitted.

use crate::models::{QuarantinedEntry, Record, RecordId};
use serde_json::Value;
use std::collections::HashSet;

/// Records that passed validation, plus the ones that were set aside.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    /// Valid candidates in file order.
    pub records: Vec<Record>,
    /// Rejected entries in file order.
    pub quarantined: Vec<QuarantinedEntry>,
    /// Number of array entries read.
    pub total: usize,
}

impl CandidateSet {
    /// Builds a set from already-typed records (no quarantine).
    #[must_use]
    pub fn from_records(records: Vec<Record>) -> Self {
        let total = records.len();
        Self {
            records,
            quarantined: Vec::new(),
            total,
        }
    }
}

/// Validates candidate entries from an import file.
///
/// # Rules
///
/// - the entry is a JSON object
/// - `id` is an integer
/// - `title` and `text` are strings that are not blank
/// - the id has not already appeared earlier in the same file
#[derive(Debug, Default)]
pub struct ImportValidator {
    seen: HashSet<RecordId>,
}

impl ImportValidator {
    /// Creates a new validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates all entries of a parsed array.
    #[must_use]
    pub fn validate_all(mut self, entries: &[Value]) -> CandidateSet {
        let mut set = CandidateSet {
            total: entries.len(),
            ..CandidateSet::default()
        };
        for (index, entry) in entries.iter().enumerate() {
            match self.validate(index, entry) {
                Ok(record) => set.records.push(record),
                Err(rejected) => {
                    tracing::debug!(index, reason = %rejected.reason, "Quarantined import entry");
                    set.quarantined.push(rejected);
                },
            }
        }
        set
    }

    /// Validates a single entry at `index`.
    ///
    /// # Errors
    ///
    /// Returns the quarantine descriptor if the entry breaks a rule.
    pub fn validate(
        &mut self,
        index: usize,
        entry: &Value,
    ) -> std::result::Result<Record, QuarantinedEntry> {
        let reject = |id: Option<RecordId>, reason: &str| QuarantinedEntry {
            index,
            id,
            reason: reason.to_string(),
        };

        let Some(object) = entry.as_object() else {
            return Err(reject(None, "entry is not an object"));
        };

        let id = match object.get("id") {
            Some(value) => value
                .as_i64()
                .map(RecordId::new)
                .ok_or_else(|| reject(None, "id is not an integer"))?,
            None => return Err(reject(None, "id is missing")),
        };

        let title = string_field(object.get("title")).ok_or_else(|| {
            reject(Some(id), "title is missing or not a non-empty string")
        })?;
        let text = string_field(object.get("text"))
            .ok_or_else(|| reject(Some(id), "text is missing or not a non-empty string"))?;

        if !self.seen.insert(id) {
            return Err(reject(Some(id), "duplicate id within the import file"));
        }

        Ok(Record {
            id,
            title: title.to_string(),
            text: text.to_string(),
        })
    }
}

fn string_field(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_valid_entry() {
        let mut validator = ImportValidator::new();
        let record = validator
            .validate(0, &json!({"id": 9001, "title": "X", "text": "Y"}))
            .unwrap();
        assert_eq!(record, Record::new(9001, "X", "Y"));
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let mut validator = ImportValidator::new();
        let record = validator
            .validate(0, &json!({"id": 1, "title": "X", "text": "Y", "color": "red"}))
            .unwrap();
        assert_eq!(record.id, RecordId::new(1));
    }

    #[test]
    fn test_rejects_malformed_entries() {
        let entries = vec![
            json!("just a string"),
            json!({"title": "X", "text": "Y"}),
            json!({"id": "12", "title": "X", "text": "Y"}),
            json!({"id": 1.5, "title": "X", "text": "Y"}),
            json!({"id": 3, "title": "", "text": "Y"}),
            json!({"id": 4, "title": "X"}),
            json!({"id": 5, "title": "X", "text": 42}),
        ];
        let set = ImportValidator::new().validate_all(&entries);
        assert!(set.records.is_empty());
        assert_eq!(set.quarantined.len(), 7);
        assert_eq!(set.total, 7);
        assert_eq!(set.quarantined[4].id, Some(RecordId::new(3)));
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let entries = vec![
            json!({"id": 7, "title": "First", "text": "a"}),
            json!({"id": 7, "title": "Second", "text": "b"}),
        ];
        let set = ImportValidator::new().validate_all(&entries);
        assert_eq!(set.records.len(), 1);
        assert_eq!(set.records[0].title, "First");
        assert_eq!(set.quarantined[0].index, 1);
        assert!(set.quarantined[0].reason.contains("duplicate"));
    }
}
