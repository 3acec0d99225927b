//! Import/Export I/O subsystem.
//!
//! Backups are pretty-printed JSON arrays with the same shape as the
//! persisted snapshot, so any backup can be restored on another machine.
//!
//! # Architecture
//!
//! - **Format** ([`formats::json`]) encodes snapshots and backups and parses
//!   untrusted import text
//! - **Validation** ([`validation`]) checks every imported element against
//!   the record contract and quarantines the rest
//! - **Sinks** ([`traits::ExportSink`]) decide where exported text lands
//! - **Services** read import files and stamp backups with a date
//!
//! # Examples
//!
//! ```rust
//! use quickassist::io::{ExportService, WriterSink};
//! use quickassist::models::seed_records;
//!
//! let mut sink = WriterSink::new(Vec::new());
//! let result = ExportService::new().export(&seed_records(), &mut sink)?;
//! assert_eq!(result.exported, 3);
//! assert!(result.file_name.starts_with("QuickAssist_Backup_"));
//! # Ok::<(), quickassist::Error>(())
//! ```

pub mod formats;
pub mod services;
pub mod traits;
pub mod validation;

// Re-exports for convenience
pub use services::{ExportResult, ExportService, ImportService};
pub use traits::{ExportSink, FileSink, WriterSink};
pub use validation::{CandidateSet, ImportValidator};
