//! Data models for quickassist.
//!
//! This module contains the core data structures used throughout the system.

mod import;
mod record;

pub use import::{ImportMode, ImportReport, QuarantinedEntry};
pub use record::{Record, RecordId, seed_records, validate_fields};
