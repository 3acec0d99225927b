//! Filesystem-based persistence backend.
//!
//! Stores each key as a JSON file (`<base_path>/<key>.json`).
//!
//! # Safety checks
//!
//! - **Path traversal**: keys are validated so they cannot escape the base
//!   directory
//! - **File size limits**: oversized files are refused instead of being read
//!   into memory
//! - **Atomic replace**: values are written to a temporary sibling file and
//!   renamed over the target, so a crash never leaves a half-written snapshot

use crate::storage::traits::PersistenceBackend;
use crate::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum file size accepted on read (8MiB).
const MAX_FILE_SIZE: u64 = 8 * 1024 * 1024;

/// Filesystem-based persistence backend.
#[derive(Debug, Clone)]
pub struct FilesystemBackend {
    /// Base directory for storage.
    base_path: PathBuf,
}

impl FilesystemBackend {
    /// Creates a new filesystem backend.
    ///
    /// The directory is created lazily on the first write.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Creates a new filesystem backend with checked directory creation.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn with_create(base_path: impl Into<PathBuf>) -> Result<Self> {
        let base_path = base_path.into();
        fs::create_dir_all(&base_path).map_err(|e| Error::operation("create_storage_dir", e))?;
        Ok(Self { base_path })
    }

    /// Returns the base path.
    #[must_use]
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Returns the file path backing `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the key is not a plain file name.
    pub fn key_path(&self, key: &str) -> Result<PathBuf> {
        if !Self::is_safe_key(key) {
            return Err(Error::InvalidInput(format!(
                "storage key contains invalid characters: {key}"
            )));
        }
        Ok(self.base_path.join(format!("{key}.json")))
    }

    /// Whether `key` can name a snapshot file.
    ///
    /// Only alphanumerics, dash and underscore are allowed.
    #[must_use]
    pub fn is_safe_key(key: &str) -> bool {
        !key.is_empty()
            && key.len() <= 200
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    }
}

impl PersistenceBackend for FilesystemBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;

        if !path.exists() {
            return Ok(None);
        }

        let metadata = fs::metadata(&path).map_err(|e| Error::operation("read_file_metadata", e))?;
        if metadata.len() > MAX_FILE_SIZE {
            return Err(Error::InvalidInput(format!(
                "snapshot exceeds maximum size of {MAX_FILE_SIZE} bytes: {}",
                path.display()
            )));
        }

        let contents =
            fs::read_to_string(&path).map_err(|e| Error::operation("read_snapshot_file", e))?;
        Ok(Some(contents))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;

        fs::create_dir_all(&self.base_path)
            .map_err(|e| Error::operation("create_storage_dir", e))?;

        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, value).map_err(|e| Error::operation("write_snapshot_file", e))?;
        fs::rename(&tmp_path, &path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            Error::operation("replace_snapshot_file", e)
        })?;

        tracing::debug!(key, path = %path.display(), bytes = value.len(), "Wrote snapshot");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool> {
        let path = self.key_path(key)?;

        if !path.exists() {
            return Ok(false);
        }

        fs::remove_file(&path).map_err(|e| Error::operation("remove_snapshot_file", e))?;
        Ok(true)
    }
}
