//! Copy command.

use crate::cli::emit;
use crate::models::RecordId;
use crate::services::{CatalogStore, ClipboardWriter, copy_to_clipboard};
use crate::storage::PersistenceBackend;
use crate::{Error, Result};
use std::io::Write;

/// Copies a response's text to the clipboard.
///
/// A clipboard failure is logged and the command still succeeds; only the
/// confirmation line is skipped.
///
/// # Errors
///
/// Returns [`Error::NotFound`] for an unknown id.
pub fn execute<P: PersistenceBackend>(
    store: &CatalogStore<P>,
    id: RecordId,
    clipboard: &dyn ClipboardWriter,
    out: &mut dyn Write,
) -> Result<()> {
    let record = store.find_by_id(id).ok_or(Error::NotFound(id))?;
    if copy_to_clipboard(clipboard, &record.text) {
        emit(out, format!("Copied \"{}\" to the clipboard.", record.title))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::testing::{output, store};
    use std::cell::RefCell;

    struct FakeClipboard {
        contents: RefCell<Option<String>>,
        available: bool,
    }

    impl FakeClipboard {
        fn new(available: bool) -> Self {
            Self {
                contents: RefCell::new(None),
                available,
            }
        }
    }

    impl ClipboardWriter for FakeClipboard {
        fn write_text(&self, text: &str) -> Result<()> {
            if !self.available {
                return Err(Error::operation("clipboard", "no display"));
            }
            *self.contents.borrow_mut() = Some(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_copy() {
        let clipboard = FakeClipboard::new(true);
        let mut out = Vec::new();
        execute(&store(), RecordId::new(1703), &clipboard, &mut out).unwrap();

        assert!(
            clipboard
                .contents
                .borrow()
                .as_deref()
                .is_some_and(|t| t.contains("Staff-Secure"))
        );
        assert_eq!(output(out), "Copied \"Wifi Refresh\" to the clipboard.\n");
    }

    #[test]
    fn test_copy_failure_is_silent() {
        let clipboard = FakeClipboard::new(false);
        let mut out = Vec::new();
        execute(&store(), RecordId::new(1703), &clipboard, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_copy_unknown() {
        let clipboard = FakeClipboard::new(true);
        let result = execute(&store(), RecordId::new(2), &clipboard, &mut Vec::new());
        assert!(matches!(result, Err(Error::NotFound(_))));
    }
}
