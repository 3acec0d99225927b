//! Backup import service.
//!
//! Reads import files and turns reconciliation reports into user-facing
//! messages. Reconciliation itself lives in [`crate::services::reconcile`]
//! and is applied through the catalog store's propose/commit protocol.

use crate::models::{ImportMode, ImportReport};
use crate::{Error, Result};
use std::path::Path;

/// Largest import file accepted (8MiB).
pub const MAX_IMPORT_SIZE: u64 = 8 * 1024 * 1024;

/// How many quarantined entries are listed before summarizing the rest.
const MAX_LISTED_ISSUES: usize = 10;

/// File-reading half of the import workflow.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportService;

impl ImportService {
    /// Creates a new import service.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Reads an import file as text.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, too large, or not UTF-8.
    pub async fn read_file(&self, path: &Path) -> Result<String> {
        let metadata = tokio::fs::metadata(path).await.map_err(|e| {
            Error::operation("open_import_file", format!("{}: {e}", path.display()))
        })?;

        if metadata.len() > MAX_IMPORT_SIZE {
            return Err(Error::InvalidImport(format!(
                "file exceeds maximum size of {MAX_IMPORT_SIZE} bytes"
            )));
        }

        tokio::fs::read_to_string(path).await.map_err(|e| {
            Error::operation("read_import_file", format!("{}: {e}", path.display()))
        })
    }

    /// Formats the outcome of a committed import.
    #[must_use]
    pub fn summarize(&self, report: &ImportReport) -> Vec<String> {
        let header = match report.mode {
            ImportMode::Merge => format!(
                "Backup restored! Added {} missing responses.",
                report.added
            ),
            ImportMode::Replace => "Backup restored! Your list has been replaced.".to_string(),
        };
        let mut lines = vec![header];
        lines.extend(self.details(report));
        lines
    }

    /// Counter and skipped-entry lines for `report`, without the headline.
    #[must_use]
    pub fn details(&self, report: &ImportReport) -> Vec<String> {
        let mut lines = Vec::new();
        match report.mode {
            ImportMode::Merge => {
                if report.collisions > 0 {
                    lines.push(format!(
                        "  Kept existing:    {} (id already present)",
                        report.collisions
                    ));
                }
            },
            ImportMode::Replace => {
                lines.push(format!("  Discarded:        {}", report.discarded));
            },
        }
        lines.push(format!("  Responses now:    {}", report.resulting_len));

        if report.has_quarantined() {
            lines.push(format!(
                "  Skipped (invalid): {}",
                report.quarantined.len()
            ));
            for entry in report.quarantined.iter().take(MAX_LISTED_ISSUES) {
                lines.push(format!("    - {entry}"));
            }
            if report.quarantined.len() > MAX_LISTED_ISSUES {
                lines.push(format!(
                    "    ... and {} more",
                    report.quarantined.len() - MAX_LISTED_ISSUES
                ));
            }
        }
        lines
    }
}
