//! Record types and identifiers.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a record within a catalog.
///
/// Seed records use small fixed values; records created at runtime use a
/// Unix-millisecond value issued by [`crate::services::IdGenerator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(i64);

impl RecordId {
    /// Creates a new record ID.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw integer value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl FromStr for RecordId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|e| Error::InvalidInput(format!("'{s}' is not a record id: {e}")))
    }
}

/// One canned-response entry.
///
/// Field order matches the persisted snapshot: `{"id", "title", "text"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Unique identifier.
    pub id: RecordId,
    /// Short human-readable label.
    pub title: String,
    /// The snippet body that gets copied.
    pub text: String,
}

impl Record {
    /// Creates a new record.
    #[must_use]
    pub fn new(id: impl Into<RecordId>, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            text: text.into(),
        }
    }

    /// Returns true if `needle` occurs in the title or the text.
    ///
    /// `needle` must already be lower-cased.
    #[must_use]
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.title.to_lowercase().contains(needle)
            || self.text.to_lowercase().contains(needle)
    }
}

/// Checks the fields accepted through create and update.
///
/// # Errors
///
/// Returns [`Error::Validation`] if either field is empty or whitespace-only.
pub fn validate_fields(title: &str, text: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(Error::Validation("title cannot be empty".to_string()));
    }
    if text.trim().is_empty() {
        return Err(Error::Validation("text cannot be empty".to_string()));
    }
    Ok(())
}

const SEED: [(i64, &str, &str); 3] = [
    (
        1701,
        "Password Reset",
        "I have gone ahead and reset your password to the default. Please try logging in with 'ChangeMe123!' (without quotes). You will be prompted to create a new, secure password immediately upon signing in.",
    ),
    (
        1702,
        "Projector Fix",
        "It sounds like the display settings might be desynchronized. Please press the 'Windows' key + 'P' at the same time. Select 'Duplicate' from the menu on the right.",
    ),
    (
        1703,
        "Wifi Refresh",
        "Let's try a quick refresh. Please toggle your Wi-Fi 'Off,' count to five, and toggle it back 'On.' Ensure you are selecting the 'Staff-Secure' network.",
    ),
];

/// Returns the built-in starter records used on first run.
#[must_use]
pub fn seed_records() -> Vec<Record> {
    SEED.iter()
        .map(|&(id, title, text)| Record::new(id, title, text))
        .collect()
}
