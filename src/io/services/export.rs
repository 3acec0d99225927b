//! Backup export service.

use crate::io::formats::{BACKUP_EXTENSION, to_backup};
use crate::io::traits::ExportSink;
use crate::models::Record;
use crate::Result;
use chrono::{NaiveDate, Utc};
use std::path::PathBuf;

/// Prefix of every backup file name.
pub const BACKUP_PREFIX: &str = "QuickAssist_Backup_";

/// Result of an export operation.
#[derive(Debug, Clone)]
pub struct ExportResult {
    /// Number of records exported.
    pub exported: usize,
    /// Suggested file name for the backup.
    pub file_name: String,
    /// Output path (if file export).
    pub output_path: Option<PathBuf>,
}

/// Serializes the catalog and hands it to a sink.
///
/// Export never mutates the catalog.
#[derive(Debug, Clone, Copy)]
pub struct ExportService {
    date: NaiveDate,
}

impl ExportService {
    /// Creates an export service stamped with today's UTC date.
    #[must_use]
    pub fn new() -> Self {
        Self::for_date(Utc::now().date_naive())
    }

    /// Creates an export service stamped with `date`.
    #[must_use]
    pub const fn for_date(date: NaiveDate) -> Self {
        Self { date }
    }

    /// Returns `QuickAssist_Backup_<YYYY-MM-DD>.json`.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!(
            "{BACKUP_PREFIX}{}.{BACKUP_EXTENSION}",
            self.date.format("%Y-%m-%d")
        )
    }

    /// Exports `records` into `sink`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the sink cannot write.
    pub fn export(&self, records: &[Record], sink: &mut dyn ExportSink) -> Result<ExportResult> {
        let contents = to_backup(records)?;
        let file_name = self.file_name();
        let output_path = sink.deliver(&file_name, &contents)?;

        tracing::info!(
            exported = records.len(),
            file_name = %file_name,
            "Exported catalog backup"
        );

        Ok(ExportResult {
            exported: records.len(),
            file_name,
            output_path,
        })
    }
}

impl Default for ExportService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::formats::parse_candidates;
    use crate::io::traits::WriterSink;
    use crate::models::seed_records;

    fn service() -> ExportService {
        ExportService::for_date(NaiveDate::from_ymd_opt(2024, 3, 7).unwrap())
    }

    #[test]
    fn test_file_name() {
        assert_eq!(service().file_name(), "QuickAssist_Backup_2024-03-07.json");
    }

    #[test]
    fn test_export_to_writer() {
        let seed = seed_records();
        let mut sink = WriterSink::new(Vec::new());
        let result = service().export(&seed, &mut sink).unwrap();

        assert_eq!(result.exported, 3);
        assert!(result.output_path.is_none());

        let written = String::from_utf8(sink.into_inner()).unwrap();
        assert!(written.starts_with("[\n  {\n    \"id\": 1701,"));
        assert_eq!(parse_candidates(&written).unwrap().records, seed);
    }

    #[test]
    fn test_export_empty_catalog() {
        let mut sink = WriterSink::new(Vec::new());
        let result = service().export(&[], &mut sink).unwrap();
        assert_eq!(result.exported, 0);
        assert_eq!(sink.into_inner(), b"[]\n");
    }
}
