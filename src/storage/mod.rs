//! Storage layer abstraction.
//!
//! The catalog is persisted through a [`PersistenceBackend`]: a key-value
//! blob store holding one serialized snapshot per key.
//!
//! - [`persistence::FilesystemBackend`]: one JSON file per key under a data
//!   directory (the default for the CLI)
//! - [`persistence::MemoryBackend`]: process-local map, used for tests and
//!   ephemeral sessions

pub mod persistence;
pub mod traits;

pub use traits::PersistenceBackend;

/// Default storage key for the catalog snapshot.
pub const DEFAULT_STORAGE_KEY: &str = "quickAssistData";
