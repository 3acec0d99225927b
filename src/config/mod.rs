//! Configuration management.

use crate::observability::LogFormat;
use crate::storage::DEFAULT_STORAGE_KEY;
use crate::storage::persistence::FilesystemBackend;
use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "QUICKASSIST_CONFIG_PATH";
/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "QUICKASSIST_DATA_DIR";
/// Environment variable overriding the storage key.
pub const STORAGE_KEY_ENV: &str = "QUICKASSIST_STORAGE_KEY";

/// Default number of characters shown in list previews.
pub const DEFAULT_PREVIEW_LENGTH: usize = 100;

/// Main configuration for quickassist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickAssistConfig {
    /// Directory holding the persisted catalog.
    pub data_dir: PathBuf,
    /// Key the catalog is stored under.
    pub storage_key: String,
    /// Characters shown per preview in `list`.
    pub preview_length: usize,
    /// Clipboard command (program then arguments); platform default if unset.
    pub clipboard_command: Option<Vec<String>>,
    /// Logging settings.
    pub logging: LoggingSettings,
}

/// Logging section of the configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Filter directive (e.g. `info`, `quickassist=debug`).
    pub level: Option<String>,
    /// Output format.
    pub format: LogFormat,
    /// Optional log file; stderr otherwise.
    pub file: Option<PathBuf>,
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Data directory.
    pub data_dir: Option<String>,
    /// Storage key.
    pub storage_key: Option<String>,
    /// Preview length.
    pub preview_length: Option<usize>,
    /// Clipboard command.
    pub clipboard_command: Option<Vec<String>>,
    /// Logging section.
    pub logging: Option<ConfigFileLogging>,
}

/// Logging section in config file.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileLogging {
    /// Filter directive.
    pub level: Option<String>,
    /// `pretty` or `json`.
    pub format: Option<String>,
    /// Log file path.
    pub file: Option<String>,
}

impl Default for QuickAssistConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            preview_length: DEFAULT_PREVIEW_LENGTH,
            clipboard_command: None,
            logging: LoggingSettings::default(),
        }
    }
}

/// `<platform data dir>/quickassist`, or `.quickassist` if there is no home.
fn default_data_dir() -> PathBuf {
    directories::BaseDirs::new().map_or_else(
        || PathBuf::from(".quickassist"),
        |dirs| dirs.data_dir().join("quickassist"),
    )
}

fn named_path(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| {
            std::env::var(CONFIG_PATH_ENV)
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from)
        })
}

impl QuickAssistConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or holds an
    /// invalid value.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::operation("read_config_file", format!("{}: {e}", path.display()))
        })?;
        Self::from_toml(&contents)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or holds an invalid
    /// value.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let file: ConfigFile =
            toml::from_str(contents).map_err(|e| Error::operation("parse_config_file", e))?;
        Self::from_config_file(file)
    }

    /// Returns the default config file location, if a home directory exists.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("quickassist").join("config.toml"))
    }

    /// Loads configuration from the default location.
    ///
    /// Returns default configuration if no config file is found or it
    /// cannot be parsed.
    #[must_use]
    pub fn load_default() -> Self {
        let Some(path) = Self::default_path().filter(|p| p.exists()) else {
            return Self::default();
        };
        Self::load_from_file(&path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Ignoring unreadable config file");
            Self::default()
        })
    }

    /// Returns the config file that [`Self::resolve`] would read.
    ///
    /// An explicit path wins, then `QUICKASSIST_CONFIG_PATH`, then the
    /// platform config directory if a file exists there.
    #[must_use]
    pub fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
        named_path(explicit).or_else(|| Self::default_path().filter(|p| p.exists()))
    }

    /// Resolves configuration the way the binary does.
    ///
    /// A file named explicitly or through `QUICKASSIST_CONFIG_PATH` must load;
    /// otherwise the default location is tried leniently. Environment
    /// overrides are applied last.
    ///
    /// # Errors
    ///
    /// Returns an error if a named config file cannot be loaded, or if
    /// `QUICKASSIST_STORAGE_KEY` is not a valid storage key.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match named_path(explicit) {
            Some(path) => Self::load_from_file(&path)?,
            None => Self::load_default(),
        };
        config.apply_overrides(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Applies `QUICKASSIST_DATA_DIR` and `QUICKASSIST_STORAGE_KEY`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the storage key override is not a
    /// plain name.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(dir) = lookup(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(key) = lookup(STORAGE_KEY_ENV).filter(|v| !v.is_empty()) {
            self.storage_key = check_storage_key(key)?;
        }
        Ok(())
    }

    /// Converts a `ConfigFile` to `QuickAssistConfig`.
    fn from_config_file(file: ConfigFile) -> Result<Self> {
        let mut config = Self::default();

        if let Some(data_dir) = file.data_dir {
            config.data_dir = PathBuf::from(data_dir);
        }
        if let Some(key) = file.storage_key {
            config.storage_key = check_storage_key(key)?;
        }
        if let Some(length) = file.preview_length {
            if length == 0 {
                return Err(Error::InvalidInput(
                    "preview_length must be at least 1".to_string(),
                ));
            }
            config.preview_length = length;
        }
        config.clipboard_command = file.clipboard_command.filter(|c| !c.is_empty());
        if let Some(logging) = file.logging {
            config.logging.level = logging.level;
            if let Some(format) = logging.format {
                config.logging.format = format.parse()?;
            }
            config.logging.file = logging.file.map(PathBuf::from);
        }

        Ok(config)
    }

    /// Sets the data directory.
    #[must_use]
    pub fn with_data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_dir = path.into();
        self
    }

    /// Sets the storage key.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Renders the resolved configuration as TOML-like lines.
    #[must_use]
    pub fn describe(&self) -> Vec<String> {
        let mut lines = vec![
            format!("data_dir = {:?}", self.data_dir.display().to_string()),
            format!("storage_key = {:?}", self.storage_key),
            format!("preview_length = {}", self.preview_length),
        ];
        if let Some(command) = &self.clipboard_command {
            lines.push(format!("clipboard_command = {command:?}"));
        }
        lines.push(String::new());
        lines.push("[logging]".to_string());
        if let Some(level) = &self.logging.level {
            lines.push(format!("level = {level:?}"));
        }
        lines.push(format!("format = {:?}", self.logging.format.as_str()));
        if let Some(file) = &self.logging.file {
            lines.push(format!("file = {:?}", file.display().to_string()));
        }
        lines
    }
}

/// Storage keys name a file, so they are limited to `[A-Za-z0-9_-]`.
fn check_storage_key(key: String) -> Result<String> {
    if key.trim().is_empty() {
        return Err(Error::InvalidInput("storage_key cannot be empty".to_string()));
    }
    if !FilesystemBackend::is_safe_key(&key) {
        return Err(Error::InvalidInput(format!(
            "storage_key may only contain letters, digits, '-' and '_': {key}"
        )));
    }
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = QuickAssistConfig::default();
        assert_eq!(config.storage_key, "quickAssistData");
        assert_eq!(config.preview_length, 100);
        assert!(config.clipboard_command.is_none());
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_parse_full_file() {
        let config = QuickAssistConfig::from_toml(
            r#"
            data_dir = "/tmp/qa"
            storage_key = "work"
            preview_length = 40
            clipboard_command = ["xclip", "-selection", "clipboard"]

            [logging]
            level = "debug"
            format = "json"
            file = "/tmp/qa.log"
            "#,
        )
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/qa"));
        assert_eq!(config.storage_key, "work");
        assert_eq!(config.preview_length, 40);
        assert_eq!(config.clipboard_command.as_ref().map(Vec::len), Some(3));
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/qa.log")));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = QuickAssistConfig::from_toml("preview_length = 20").unwrap();
        assert_eq!(config.preview_length, 20);
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(QuickAssistConfig::from_toml("preview_length = 0").is_err());
        assert!(QuickAssistConfig::from_toml("storage_key = \"  \"").is_err());
        assert!(matches!(
            QuickAssistConfig::from_toml("storage_key = \"work.v2\""),
            Err(Error::InvalidInput(_))
        ));
        assert!(QuickAssistConfig::from_toml("storage_key = \"../escape\"").is_err());
        assert!(QuickAssistConfig::from_toml("storage_key = \"work-v2_b\"").is_ok());
        assert!(QuickAssistConfig::from_toml("[logging]\nformat = \"xml\"").is_err());
        assert!(QuickAssistConfig::from_toml("unknown_key = 1").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "storage_key = \"home\"").unwrap();

        let config = QuickAssistConfig::load_from_file(&path).unwrap();
        assert_eq!(config.storage_key, "home");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = QuickAssistConfig::load_from_file(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(Error::OperationFailed { .. })));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [(DATA_DIR_ENV, "/srv/qa"), (STORAGE_KEY_ENV, "")]
            .into_iter()
            .collect();
        let mut config = QuickAssistConfig::default();
        config
            .apply_overrides(|name| env.get(name).map(|v| (*v).to_string()))
            .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/srv/qa"));
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);

        let mut config = QuickAssistConfig::default();
        config
            .apply_overrides(|name| (name == STORAGE_KEY_ENV).then(|| "home".to_string()))
            .unwrap();
        assert_eq!(config.storage_key, "home");
    }

    #[test]
    fn test_env_override_rejects_unsafe_storage_key() {
        let mut config = QuickAssistConfig::default();
        let result =
            config.apply_overrides(|name| (name == STORAGE_KEY_ENV).then(|| "work.v2".to_string()));

        assert!(matches!(result, Err(Error::InvalidInput(_))));
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn test_describe() {
        let lines = QuickAssistConfig::default()
            .with_storage_key("k")
            .describe();
        assert!(lines.contains(&"storage_key = \"k\"".to_string()));
        assert!(lines.contains(&"format = \"pretty\"".to_string()));
    }
}
