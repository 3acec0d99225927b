//! Format adapters for snapshots and backups.
//!
//! JSON is the only on-disk format: the persisted snapshot and the backup
//! file share one shape and differ only in indentation.

pub mod json;

pub use json::{parse_candidates, parse_snapshot, to_backup, to_snapshot};

/// File extension used for backups.
pub const BACKUP_EXTENSION: &str = "json";
