//! JSON codec for snapshots and backups.
//!
//! The persisted snapshot is a compact JSON array of `{id, title, text}`
//! objects. Backup files use the same shape, pretty-printed with a two-space
//! indent. There is no envelope and no version field.

use crate::io::validation::{CandidateSet, ImportValidator};
use crate::models::Record;
use crate::{Error, Result};
use serde_json::Value;

/// Serializes records into the compact snapshot form.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_snapshot(records: &[Record]) -> Result<String> {
    serde_json::to_string(records).map_err(|e| Error::operation("serialize_snapshot", e))
}

/// Serializes records into the pretty-printed backup form.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_backup(records: &[Record]) -> Result<String> {
    serde_json::to_string_pretty(records).map_err(|e| Error::operation("serialize_backup", e))
}

/// Parses a persisted snapshot.
///
/// # Errors
///
/// Returns an error if the text is not a JSON array of records.
pub fn parse_snapshot(text: &str) -> Result<Vec<Record>> {
    serde_json::from_str(text).map_err(|e| Error::operation("deserialize_snapshot", e))
}

/// Parses the text of an import file into validated candidates.
///
/// # Errors
///
/// Returns [`Error::InvalidImport`] if the text is not JSON or the document
/// is not an array. Malformed elements inside a valid array do not fail the
/// import; they are quarantined in the returned [`CandidateSet`].
pub fn parse_candidates(text: &str) -> Result<CandidateSet> {
    let document: Value = serde_json::from_str(text)
        .map_err(|e| Error::InvalidImport(format!("file is not valid JSON: {e}")))?;

    let entries = match document {
        Value::Array(entries) => entries,
        other => {
            return Err(Error::InvalidImport(format!(
                "expected a JSON array of responses, found {}",
                describe(&other)
            )));
        },
    };

    Ok(ImportValidator::new().validate_all(&entries))
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
