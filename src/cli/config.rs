//! Config command.

use crate::Result;
use crate::cli::{emit, emit_all};
use crate::config::QuickAssistConfig;
use std::io::Write;
use std::path::Path;

/// Prints the resolved configuration.
///
/// `source` is the file it was loaded from, if any.
///
/// # Errors
///
/// Returns an error if output cannot be written.
pub fn execute(
    config: &QuickAssistConfig,
    source: Option<&Path>,
    out: &mut dyn Write,
) -> Result<()> {
    match source {
        Some(path) => emit(out, format!("# loaded from {}", path.display()))?,
        None => emit(out, "# no config file found, using defaults")?,
    }
    emit_all(out, config.describe())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::testing::output;

    #[test]
    fn test_config_output() {
        let config = QuickAssistConfig::default().with_data_dir("/tmp/qa");
        let mut out = Vec::new();
        execute(&config, None, &mut out).unwrap();

        let text = output(out);
        assert!(text.starts_with("# no config file found"));
        assert!(text.contains("data_dir = \"/tmp/qa\""));
        assert!(text.contains("storage_key = \"quickAssistData\""));
    }
}
