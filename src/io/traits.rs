//! Export sinks.
//!
//! The core produces backup text; an [`ExportSink`] decides where it lands.

use crate::{Error, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Destination for a serialized backup.
///
/// # Example Implementation
///
/// ```rust,ignore
/// impl ExportSink for UploadSink {
///     fn deliver(&mut self, suggested_name: &str, contents: &str) -> Result<Option<PathBuf>> {
///         self.client.put(suggested_name, contents)?;
///         Ok(None)
///     }
/// }
/// ```
pub trait ExportSink {
    /// Writes `contents`, using `suggested_name` where a file name is needed.
    ///
    /// Returns the path written to, if the sink is file-backed.
    ///
    /// # Errors
    ///
    /// Returns an error if the contents cannot be written.
    fn deliver(&mut self, suggested_name: &str, contents: &str) -> Result<Option<PathBuf>>;
}

/// Writes backups to the filesystem.
///
/// The target names a directory (the suggested file name is used inside it)
/// when it already is one, ends with a path separator, or has no extension.
/// Otherwise it is the file path itself. Missing directories are created.
#[derive(Debug, Clone)]
pub struct FileSink {
    target: PathBuf,
}

impl FileSink {
    /// Creates a sink writing to `target` (a directory or a file path).
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
        }
    }

    /// Resolves the final file path for `suggested_name`.
    #[must_use]
    pub fn resolve(&self, suggested_name: &str) -> PathBuf {
        if names_directory(&self.target) {
            self.target.join(suggested_name)
        } else {
            self.target.clone()
        }
    }
}

fn names_directory(path: &Path) -> bool {
    path.is_dir()
        || path
            .as_os_str()
            .to_string_lossy()
            .ends_with(std::path::is_separator)
        || path.extension().is_none()
}

impl ExportSink for FileSink {
    fn deliver(&mut self, suggested_name: &str, contents: &str) -> Result<Option<PathBuf>> {
        let path = self.resolve(suggested_name);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| Error::operation("create_export_dir", e))?;
        }
        std::fs::write(&path, contents).map_err(|e| {
            Error::operation("write_export_file", format!("{}: {e}", path.display()))
        })?;
        Ok(Some(path))
    }
}

/// Writes backups to any [`Write`] implementation (e.g. stdout).
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    /// Creates a new writer sink.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ExportSink for WriterSink<W> {
    fn deliver(&mut self, _suggested_name: &str, contents: &str) -> Result<Option<PathBuf>> {
        writeln!(self.writer, "{contents}").map_err(|e| Error::operation("write_export", e))?;
        self.writer
            .flush()
            .map_err(|e| Error::operation("flush_export", e))?;
        Ok(None)
    }
}

/// Returns true if `path` names stdout (`-`).
#[must_use]
pub fn is_stdout(path: &Path) -> bool {
    path.as_os_str() == "-"
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_sink_directory_target() {
        let dir = TempDir::new().unwrap();
        let mut sink = FileSink::new(dir.path());
        let path = sink.deliver("backup.json", "[]").unwrap().unwrap();
        assert_eq!(path, dir.path().join("backup.json"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "[]");
    }

    #[test]
    fn test_file_sink_file_target_creates_parents() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("nested").join("mine.json");
        let mut sink = FileSink::new(&target);
        let path = sink.deliver("ignored.json", "[]").unwrap().unwrap();
        assert_eq!(path, target);
        assert!(target.exists());
    }

    #[test]
    fn test_file_sink_missing_directory_with_trailing_slash() {
        let dir = TempDir::new().unwrap();
        let target = format!("{}/backups/", dir.path().display());
        let mut sink = FileSink::new(&target);

        let path = sink.deliver("backup.json", "[]").unwrap().unwrap();
        assert_eq!(path, dir.path().join("backups").join("backup.json"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "[]");
    }

    #[test]
    fn test_file_sink_missing_directory_without_extension() {
        let dir = TempDir::new().unwrap();
        let mut sink = FileSink::new(dir.path().join("backups"));

        let path = sink.deliver("backup.json", "[]").unwrap().unwrap();
        assert_eq!(path, dir.path().join("backups").join("backup.json"));
        assert!(dir.path().join("backups").is_dir());
    }

    #[test]
    fn test_writer_sink() {
        let mut sink = WriterSink::new(Vec::new());
        assert!(sink.deliver("x.json", "[]").unwrap().is_none());
        assert_eq!(sink.into_inner(), b"[]\n");
    }

    #[test]
    fn test_is_stdout() {
        assert!(is_stdout(Path::new("-")));
        assert!(!is_stdout(Path::new("backup.json")));
    }
}
