//! Import and export services.

pub mod export;
pub mod import;

pub use export::{ExportResult, ExportService};
pub use import::ImportService;
