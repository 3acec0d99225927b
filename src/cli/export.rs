//! Export command.

use crate::Result;
use crate::cli::emit;
use crate::io::traits::is_stdout;
use crate::io::{ExportService, FileSink, WriterSink};
use crate::services::CatalogStore;
use crate::storage::PersistenceBackend;
use std::io::Write;
use std::path::Path;

/// Where an export goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportTarget<'a> {
    /// Standard output (`-o -`).
    Stdout,
    /// A directory (suggested file name used) or an explicit file path.
    Path(&'a Path),
}

impl<'a> ExportTarget<'a> {
    /// Interprets the `-o` argument; no argument means the current directory.
    #[must_use]
    pub fn from_arg(output: Option<&'a Path>) -> Self {
        match output {
            Some(path) if is_stdout(path) => Self::Stdout,
            Some(path) => Self::Path(path),
            None => Self::Path(Path::new(".")),
        }
    }
}

/// Writes a dated backup of the catalog.
///
/// When the backup goes to a file, a confirmation line is written to `out`.
/// When it goes to stdout, `out` receives the backup itself.
///
/// # Errors
///
/// Returns an error if the backup cannot be written.
pub fn execute<P: PersistenceBackend>(
    store: &CatalogStore<P>,
    service: &ExportService,
    target: ExportTarget<'_>,
    out: &mut dyn Write,
) -> Result<()> {
    match target {
        ExportTarget::Stdout => {
            let mut sink = WriterSink::new(out);
            service.export(store.list(), &mut sink)?;
            Ok(())
        },
        ExportTarget::Path(path) => {
            let mut sink = FileSink::new(path);
            let result = service.export(store.list(), &mut sink)?;
            let written = result
                .output_path
                .map_or_else(|| result.file_name.clone(), |p| p.display().to_string());
            emit(
                out,
                format!("Exported {} responses to {written}", result.exported),
            )
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::testing::{output, store};
    use crate::io::formats::parse_snapshot;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn service() -> ExportService {
        ExportService::for_date(NaiveDate::from_ymd_opt(2024, 3, 7).unwrap())
    }

    #[test]
    fn test_target_from_arg() {
        assert_eq!(
            ExportTarget::from_arg(Some(Path::new("-"))),
            ExportTarget::Stdout
        );
        assert_eq!(
            ExportTarget::from_arg(None),
            ExportTarget::Path(Path::new("."))
        );
    }

    #[test]
    fn test_export_to_directory() {
        let dir = TempDir::new().unwrap();
        let mut out = Vec::new();
        execute(
            &store(),
            &service(),
            ExportTarget::Path(dir.path()),
            &mut out,
        )
        .unwrap();

        let path = dir.path().join("QuickAssist_Backup_2024-03-07.json");
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(parse_snapshot(&written).unwrap().len(), 3);
        assert!(output(out).starts_with("Exported 3 responses to "));
    }

    #[test]
    fn test_export_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("backups/");
        execute(
            &store(),
            &service(),
            ExportTarget::from_arg(Some(&target)),
            &mut Vec::new(),
        )
        .unwrap();

        assert!(
            dir.path()
                .join("backups")
                .join("QuickAssist_Backup_2024-03-07.json")
                .is_file()
        );
    }

    #[test]
    fn test_export_to_stdout_writer() {
        let mut out = Vec::new();
        execute(&store(), &service(), ExportTarget::Stdout, &mut out).unwrap();
        let text = output(out);
        assert!(text.starts_with("[\n  {"));
        assert_eq!(parse_snapshot(&text).unwrap().len(), 3);
    }
}
