//! Catalog services.
//!
//! The catalog store owns the record list; the other modules are the pure
//! pieces it is built from (search, id issuance, import reconciliation) plus
//! the clipboard collaborator used by the `copy` command.

mod catalog;
pub mod clipboard;
mod id_generator;
mod pending;
pub mod query;
pub mod reconcile;

pub use catalog::{CatalogStore, LoadSource};
pub use clipboard::{ClipboardWriter, SystemClipboard, copy_to_clipboard};
pub use id_generator::IdGenerator;
pub use pending::{ChangeKind, CommitOutcome, PendingChange};
pub use reconcile::{Reconciliation, reconcile};
