//! Import mode and report types.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::RecordId;

/// Strategy used when importing a backup into the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportMode {
    /// Append only candidates whose id is not already present.
    #[default]
    Merge,
    /// Discard the current catalog and use the candidates instead.
    Replace,
}

impl ImportMode {
    /// Returns the mode as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Merge => "merge",
            Self::Replace => "replace",
        }
    }

    /// Parses a mode string (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "merge" => Some(Self::Merge),
            "replace" => Some(Self::Replace),
            _ => None,
        }
    }

    /// Whether this mode destroys existing records.
    #[must_use]
    pub const fn is_destructive(&self) -> bool {
        matches!(self, Self::Replace)
    }
}

impl fmt::Display for ImportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ImportMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| {
            Error::InvalidInput(format!("unknown import mode '{s}' (expected merge or replace)"))
        })
    }
}

/// A candidate entry that was kept out of the catalog during import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuarantinedEntry {
    /// Position of the entry in the imported array (0-based).
    pub index: usize,
    /// Id of the entry, when one could be read.
    pub id: Option<RecordId>,
    /// Why the entry was rejected.
    pub reason: String,
}

impl fmt::Display for QuarantinedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "entry #{} (id {id}): {}", self.index, self.reason),
            None => write!(f, "entry #{}: {}", self.index, self.reason),
        }
    }
}

/// Outcome of reconciling an import against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReport {
    /// Mode the import was run in.
    pub mode: ImportMode,
    /// Number of array entries read from the file.
    pub candidates: usize,
    /// Records that end up newly present in the catalog.
    pub added: usize,
    /// Candidates dropped because their id already existed (merge only).
    pub collisions: usize,
    /// Records discarded from the previous catalog (replace only).
    pub discarded: usize,
    /// Entries rejected by validation.
    pub quarantined: Vec<QuarantinedEntry>,
    /// Size of the catalog after the import is committed.
    pub resulting_len: usize,
}

impl ImportReport {
    /// Returns whether any entries were rejected.
    #[must_use]
    pub fn has_quarantined(&self) -> bool {
        !self.quarantined.is_empty()
    }
}
