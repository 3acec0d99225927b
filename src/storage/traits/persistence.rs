//! Persistence backend trait.

use crate::Result;
use std::sync::Arc;

/// Trait for persistence layer backends.
///
/// A persistence backend is a key-value blob store. The catalog store reads
/// one snapshot from it at startup and writes the full snapshot back after
/// every mutation. Writes are last-write-wins; there is no locking.
pub trait PersistenceBackend: Send + Sync {
    /// Reads the blob stored under `key`.
    ///
    /// Returns `Ok(None)` if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored value exists but cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the blob stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be written.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Removes the blob stored under `key`.
    ///
    /// Returns whether anything was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the value exists but cannot be removed.
    fn remove(&self, key: &str) -> Result<bool>;

    /// Checks if a blob is stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be queried.
    fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.read(key)?.is_some())
    }
}

impl<T: PersistenceBackend + ?Sized> PersistenceBackend for Arc<T> {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) -> Result<bool> {
        (**self).remove(key)
    }

    fn exists(&self, key: &str) -> Result<bool> {
        (**self).exists(key)
    }
}
