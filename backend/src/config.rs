//! # Configuration
//!
//! Settings are layered: built-in defaults, then an optional YAML file, then
//! environment variables.
//!
//! ## YAML Format
//!
//! ```yaml
//! data_dir: "data"
//! storage: "sqlite"          # csv (default) or sqlite
//! database_file: "guesses.db" # relative to data_dir
//! show_results: false
//! results_password: "ice cold"
//! ```
//!
//! ## Environment
//!
//! - `SHOW_RESULTS`: `true` (any case) makes the results page public
//! - `RESULTS_PASSWORD`: shared secret for the results page
//! - `GUESS_BOOK_DATA_DIR`: data directory
//! - `GUESS_BOOK_STORAGE`: `csv` or `sqlite`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

pub const ENV_SHOW_RESULTS: &str = "SHOW_RESULTS";
pub const ENV_RESULTS_PASSWORD: &str = "RESULTS_PASSWORD";
pub const ENV_DATA_DIR: &str = "GUESS_BOOK_DATA_DIR";
pub const ENV_STORAGE: &str = "GUESS_BOOK_STORAGE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid value {value:?} for {name}")]
    InvalidValue { name: &'static str, value: String },
}

/// Which storage backend holds the guess book
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    #[default]
    Csv,
    Sqlite,
}

impl FromStr for StorageKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(StorageKind::Csv),
            "sqlite" => Ok(StorageKind::Sqlite),
            _ => Err(ConfigError::InvalidValue {
                name: ENV_STORAGE,
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding guesses.csv or the database file
    pub data_dir: PathBuf,
    pub storage: StorageKind,
    /// SQLite database file; relative paths are resolved against `data_dir`
    pub database_file: PathBuf,
    /// Public mode: the results page needs no password
    pub show_results: bool,
    pub results_password: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            storage: StorageKind::Csv,
            database_file: PathBuf::from("guesses.db"),
            show_results: false,
            results_password: String::new(),
        }
    }
}

// Keeps the password out of logs
impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("data_dir", &self.data_dir)
            .field("storage", &self.storage)
            .field("database_file", &self.database_file)
            .field("show_results", &self.show_results)
            .field("results_password", &"<redacted>")
            .finish()
    }
}

impl AppConfig {
    /// Defaults, then `path` if given, then the process environment
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides(|name| std::env::var(name).ok())?;
        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Read a YAML config file; missing keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let yaml_content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&yaml_content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply environment overrides looked up through `lookup`
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_SHOW_RESULTS) {
            self.show_results = value.trim().eq_ignore_ascii_case("true");
        }
        if let Some(value) = lookup(ENV_RESULTS_PASSWORD) {
            self.results_password = value;
        }
        if let Some(value) = lookup(ENV_DATA_DIR) {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    name: ENV_DATA_DIR,
                    value,
                });
            }
            self.data_dir = PathBuf::from(value);
        }
        if let Some(value) = lookup(ENV_STORAGE) {
            self.storage = value.parse()?;
        }
        Ok(())
    }

    /// Full path of the SQLite database file
    pub fn database_path(&self) -> PathBuf {
        if self.database_file.is_absolute() {
            self.database_file.clone()
        } else {
            self.data_dir.join(&self.database_file)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.storage, StorageKind::Csv);
        assert!(!config.show_results);
        assert_eq!(config.results_password, "");
        assert_eq!(config.database_path(), PathBuf::from("data").join("guesses.db"));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = AppConfig::default();
        config
            .apply_env_overrides(env(&[
                ("SHOW_RESULTS", "TRUE"),
                ("RESULTS_PASSWORD", "ice cold"),
                ("GUESS_BOOK_DATA_DIR", "/srv/guesses"),
                ("GUESS_BOOK_STORAGE", "SQLite"),
            ]))
            .unwrap();

        assert!(config.show_results);
        assert_eq!(config.results_password, "ice cold");
        assert_eq!(config.data_dir, PathBuf::from("/srv/guesses"));
        assert_eq!(config.storage, StorageKind::Sqlite);
    }

    #[test]
    fn test_show_results_only_accepts_true() {
        for value in ["false", "1", "yes", ""] {
            let mut config = AppConfig {
                show_results: true,
                ..Default::default()
            };
            config.apply_env_overrides(env(&[("SHOW_RESULTS", value)])).unwrap();
            assert!(!config.show_results, "SHOW_RESULTS={:?}", value);
        }
    }

    #[test]
    fn test_invalid_storage_kind() {
        let mut config = AppConfig::default();
        let error = config
            .apply_env_overrides(env(&[("GUESS_BOOK_STORAGE", "postgres")]))
            .unwrap_err();
        assert!(matches!(error, ConfigError::InvalidValue { name: ENV_STORAGE, .. }));
    }

    #[test]
    fn test_from_file_with_partial_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("guess_book.yaml");
        fs::write(&path, "storage: sqlite\nresults_password: \"ice cold\"\ndatabase_file: /var/lib/guesses.db\n").unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.storage, StorageKind::Sqlite);
        assert_eq!(config.results_password, "ice cold");
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.database_path(), PathBuf::from("/var/lib/guesses.db"));
    }

    #[test]
    fn test_from_file_errors() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.yaml");
        assert!(matches!(AppConfig::from_file(&missing), Err(ConfigError::Read { .. })));

        let broken = temp_dir.path().join("broken.yaml");
        fs::write(&broken, "storage: [not, a, kind]\n").unwrap();
        assert!(matches!(AppConfig::from_file(&broken), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = AppConfig {
            results_password: "ice cold".to_string(),
            ..Default::default()
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("ice cold"));
        assert!(debug.contains("<redacted>"));
    }
}
