//! Structured logging configuration.

use crate::config::LoggingSettings;
use crate::{Error, Result};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_FILTER_ENV: &str = "QUICKASSIST_LOG";

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable, multi-line output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Returns the format as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pretty => "pretty",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LogFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(Error::InvalidInput(format!(
                "unknown log format '{other}' (expected 'pretty' or 'json')"
            ))),
        }
    }
}

/// Resolved logging configuration.
#[derive(Debug)]
pub struct LoggingConfig {
    /// Event filter.
    pub filter: EnvFilter,
    /// Output format.
    pub format: LogFormat,
    /// Log file; stderr if unset.
    pub file: Option<PathBuf>,
}

impl LoggingConfig {
    /// Builds the logging configuration.
    ///
    /// The filter comes from `QUICKASSIST_LOG`, then `RUST_LOG`, then the
    /// configured level, then `warn` (`debug` when `verbose`).
    #[must_use]
    pub fn from_settings(settings: &LoggingSettings, verbose: bool) -> Self {
        let env_directive = std::env::var(LOG_FILTER_ENV)
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok();
        let directive = select_directive(env_directive, settings.level.as_deref(), verbose);

        Self {
            filter: EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn")),
            format: settings.format,
            file: settings.file.clone(),
        }
    }
}

fn select_directive(env: Option<String>, configured: Option<&str>, verbose: bool) -> String {
    if let Some(directive) = env.filter(|d| !d.trim().is_empty()) {
        return directive;
    }
    if verbose {
        return "debug".to_string();
    }
    configured.map_or_else(|| "warn".to_string(), str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("pretty", LogFormat::Pretty; "pretty")]
    #[test_case("JSON", LogFormat::Json; "json uppercase")]
    #[test_case("text", LogFormat::Pretty; "text alias")]
    fn test_parse_format(input: &str, expected: LogFormat) {
        assert_eq!(input.parse::<LogFormat>().unwrap(), expected);
    }

    #[test]
    fn test_parse_unknown_format() {
        assert!(matches!(
            "xml".parse::<LogFormat>(),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_directive_precedence() {
        assert_eq!(
            select_directive(Some("trace".into()), Some("info"), true),
            "trace"
        );
        assert_eq!(select_directive(None, Some("info"), true), "debug");
        assert_eq!(select_directive(None, Some("info"), false), "info");
        assert_eq!(select_directive(Some(" ".into()), None, false), "warn");
    }
}
