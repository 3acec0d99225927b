//! Import command.
//!
//! # Usage
//!
//! ```bash
//! # Ask whether to merge or replace
//! quickassist import backup.json
//!
//! # Add only the responses that are missing
//! quickassist import backup.json --mode merge
//!
//! # Replace everything without asking
//! quickassist import backup.json --mode replace --yes
//! ```

use crate::cli::{Confirm, emit, emit_all};
use crate::io::ImportService;
use crate::models::ImportMode;
use crate::services::{CatalogStore, ChangeKind, CommitOutcome};
use crate::storage::PersistenceBackend;
use crate::Result;
use std::io::Write;
use std::path::Path;

/// Question asked when no `--mode` is given.
pub const MODE_QUESTION: &str =
    "Merge (add missing ones)? Answering no replaces your whole list.";

/// Imports a backup file.
///
/// Without `mode` the user picks: yes merges, no replaces. Replacing always
/// needs a second confirmation. A merge that would add nothing is reported
/// and leaves the stored catalog untouched.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not a JSON array, or the
/// catalog cannot be saved.
pub async fn execute<P: PersistenceBackend>(
    store: &mut CatalogStore<P>,
    service: &ImportService,
    path: &Path,
    mode: Option<ImportMode>,
    confirm: &mut dyn Confirm,
    out: &mut dyn Write,
) -> Result<()> {
    let text = service.read_file(path).await?;

    let mode = match mode {
        Some(mode) => mode,
        None if confirm.confirm(MODE_QUESTION)? => ImportMode::Merge,
        None => ImportMode::Replace,
    };

    let change = store.propose_import(&text, mode)?;
    if change.is_noop()
        && let ChangeKind::Import { report, .. } = change.kind()
    {
        emit(out, "Nothing new to add.")?;
        return emit_all(out, service.details(report));
    }
    if change.requires_confirmation() && !confirm.confirm(&change.summary())? {
        return emit(out, "Cancelled.");
    }

    match store.commit(change)? {
        CommitOutcome::Imported(report) => emit_all(out, service.summarize(&report)),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::cli::testing::{ScriptedConfirm, output, store};
    use crate::models::RecordId;
    use tempfile::TempDir;

    const BACKUP: &str = r#"[
        {"id": 1701, "title": "Changed title", "text": "Changed text"},
        {"id": 9001, "title": "X", "text": "Y"}
    ]"#;

    fn write_backup(dir: &TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("backup.json");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[tokio::test]
    async fn test_merge_by_flag() {
        let dir = TempDir::new().unwrap();
        let path = write_backup(&dir, BACKUP);
        let mut store = store();
        let mut confirm = ScriptedConfirm::default();
        let mut out = Vec::new();

        execute(
            &mut store,
            &ImportService::new(),
            &path,
            Some(ImportMode::Merge),
            &mut confirm,
            &mut out,
        )
        .await
        .unwrap();

        assert!(confirm.asked.is_empty());
        assert_eq!(store.len(), 4);
        assert_eq!(
            store.find_by_id(RecordId::new(1701)).unwrap().title,
            "Password Reset"
        );
        assert!(output(out).starts_with("Backup restored! Added 1 missing responses."));
    }

    #[tokio::test]
    async fn test_mode_question_yes_merges() {
        let dir = TempDir::new().unwrap();
        let path = write_backup(&dir, BACKUP);
        let mut store = store();
        let mut confirm = ScriptedConfirm::new(&[true]);

        execute(
            &mut store,
            &ImportService::new(),
            &path,
            None,
            &mut confirm,
            &mut Vec::new(),
        )
        .await
        .unwrap();

        assert_eq!(confirm.asked, vec![MODE_QUESTION]);
        assert_eq!(store.len(), 4);
    }

    #[tokio::test]
    async fn test_mode_question_no_then_confirm_replaces() {
        let dir = TempDir::new().unwrap();
        let path = write_backup(&dir, BACKUP);
        let mut store = store();
        let mut confirm = ScriptedConfirm::new(&[false, true]);
        let mut out = Vec::new();

        execute(
            &mut store,
            &ImportService::new(),
            &path,
            None,
            &mut confirm,
            &mut out,
        )
        .await
        .unwrap();

        assert_eq!(confirm.asked.len(), 2);
        assert_eq!(store.len(), 2);
        assert_eq!(store.list()[0].title, "Changed title");
        assert!(output(out).starts_with("Backup restored! Your list has been replaced."));
    }

    #[tokio::test]
    async fn test_replace_declined() {
        let dir = TempDir::new().unwrap();
        let path = write_backup(&dir, BACKUP);
        let mut store = store();
        let mut confirm = ScriptedConfirm::new(&[false]);
        let mut out = Vec::new();

        execute(
            &mut store,
            &ImportService::new(),
            &path,
            Some(ImportMode::Replace),
            &mut confirm,
            &mut out,
        )
        .await
        .unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.revision(), 0);
        assert_eq!(output(out), "Cancelled.\n");
    }

    #[tokio::test]
    async fn test_non_array_leaves_catalog_untouched() {
        let dir = TempDir::new().unwrap();
        let path = write_backup(&dir, r#"{"not":"an array"}"#);
        let mut store = store();

        let result = execute(
            &mut store,
            &ImportService::new(),
            &path,
            Some(ImportMode::Merge),
            &mut ScriptedConfirm::default(),
            &mut Vec::new(),
        )
        .await;

        assert!(matches!(result, Err(Error::InvalidImport(_))));
        assert_eq!(store.len(), 3);
        assert_eq!(store.revision(), 0);
    }

    #[tokio::test]
    async fn test_merge_with_nothing_new() {
        let dir = TempDir::new().unwrap();
        let path = write_backup(
            &dir,
            r#"[{"id": 1701, "title": "Changed", "text": "Changed"}, {"id": 5, "title": "", "text": "x"}]"#,
        );
        let mut store = store();
        let mut out = Vec::new();

        execute(
            &mut store,
            &ImportService::new(),
            &path,
            Some(ImportMode::Merge),
            &mut ScriptedConfirm::default(),
            &mut out,
        )
        .await
        .unwrap();

        let text = output(out);
        assert!(text.starts_with("Nothing new to add.\n"));
        assert!(text.contains("Kept existing:    1"));
        assert!(text.contains("Skipped (invalid): 1"));
        assert_eq!(store.revision(), 0);
        assert!(!store.backend().exists(crate::storage::DEFAULT_STORAGE_KEY).unwrap());
    }
}
