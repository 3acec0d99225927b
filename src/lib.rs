//! # `QuickAssist`
//!
//! A personal canned-response manager.
//!
//! `QuickAssist` keeps a small catalog of reusable text snippets (a title plus
//! a body), lets the user search them, copy one to the clipboard, and edit
//! the catalog. The catalog is persisted to a local key-value store after
//! every change and can be exported to, or merged/replaced from, a JSON
//! backup file.
//!
//! ## Features
//!
//! - Write-through persistence with a fail-soft load (falls back to the
//!   built-in starter records)
//! - Case-insensitive incremental search over titles and bodies
//! - Backup export with dated file names
//! - Import in merge or replace mode, with per-record validation
//! - Two-step confirmation protocol for destructive changes
//!
//! ## Example
//!
//! ```rust
//! use quickassist::services::CatalogStore;
//! use quickassist::storage::persistence::MemoryBackend;
//!
//! let mut store = CatalogStore::load(MemoryBackend::new(), "quickAssistData");
//! let record = store.create("Greeting", "Hello! How can I help you today?")?;
//! assert_eq!(store.list().len(), 4);
//! assert_eq!(store.search("hello").len(), 1);
//! assert_eq!(store.find_by_id(record.id).map(|r| r.title.as_str()), Some("Greeting"));
//! # Ok::<(), quickassist::Error>(())
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error as ThisError;

// Module declarations
pub mod cli;
pub mod config;
pub mod io;
pub mod models;
pub mod observability;
pub mod rendering;
pub mod services;
pub mod storage;

// Re-exports for convenience
pub use config::QuickAssistConfig;
pub use models::{ImportMode, Record, RecordId};
pub use services::{CatalogStore, PendingChange};
pub use storage::PersistenceBackend;

/// Error type for quickassist operations.
///
/// # Error Variant Triggers
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `Validation` | Empty title or text on create/update |
/// | `NotFound` | Update, show or copy of an id that is not in the catalog |
/// | `InvalidImport` | Import text is not JSON, or is JSON but not an array |
/// | `StaleChange` | A pending change is committed after the catalog moved on |
/// | `InvalidInput` | Malformed CLI arguments or configuration values |
/// | `OperationFailed` | I/O, serialization or persistence write failures |
#[derive(Debug, ThisError)]
pub enum Error {
    /// A record failed field validation.
    ///
    /// Raised when:
    /// - `title` is empty or whitespace-only
    /// - `text` is empty or whitespace-only
    ///
    /// The catalog is left untouched and nothing is persisted.
    #[error("validation failed: {0}")]
    Validation(String),

    /// No record with the given id exists.
    #[error("record {0} not found")]
    NotFound(RecordId),

    /// Import input was structurally invalid.
    ///
    /// Raised when:
    /// - The file is not valid JSON
    /// - The JSON document is not an array
    #[error("invalid import: {0}")]
    InvalidImport(String),

    /// A pending change no longer applies to the catalog.
    ///
    /// Raised when a change proposed at one catalog revision is committed
    /// after another mutation has already been applied.
    #[error("pending change is stale (proposed at revision {expected}, catalog is at {actual})")]
    StaleChange {
        /// Revision the change was proposed against.
        expected: u64,
        /// Current catalog revision.
        actual: u64,
    },

    /// Invalid input was provided.
    ///
    /// Raised when:
    /// - A CLI argument cannot be parsed (e.g. an unknown import mode)
    /// - A configuration value is out of range
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation failed.
    ///
    /// Raised when:
    /// - Filesystem I/O errors occur
    /// - JSON serialization fails
    /// - The persistence backend rejects a write
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },
}

impl Error {
    /// Builds an [`Error::OperationFailed`] from an operation name and cause.
    pub fn operation(operation: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        Self::OperationFailed {
            operation: operation.into(),
            cause: cause.to_string(),
        }
    }
}

/// Result type alias for quickassist operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Returns the current Unix timestamp in milliseconds.
///
/// Falls back to 0 if the system clock is before the Unix epoch.
///
/// # Examples
///
/// ```rust
/// use quickassist::current_timestamp_millis;
///
/// assert!(current_timestamp_millis() > 0);
/// ```
#[must_use]
pub fn current_timestamp_millis() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .ok()
        .and_then(|d| i64::try_from(d.as_millis()).ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Validation("title cannot be empty".to_string());
        assert_eq!(err.to_string(), "validation failed: title cannot be empty");

        let err = Error::NotFound(RecordId::new(42));
        assert_eq!(err.to_string(), "record 42 not found");

        let err = Error::operation("write_snapshot", "disk full");
        assert_eq!(err.to_string(), "operation 'write_snapshot' failed: disk full");

        let err = Error::StaleChange {
            expected: 1,
            actual: 3,
        };
        assert!(err.to_string().contains("revision 1"));
    }
}
