//! Wrapper configuration, loaded from TOML.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::{WrapError, WrapResult};

/// Configuration for one database/table binding.
///
/// ```toml
/// db_path = "flights.db"
/// table_name = "positions"
/// strict_identifiers = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WrapConfig {
    /// Path to the SQLite database file.
    pub db_path: Option<PathBuf>,
    /// Table that every insert and read targets.
    pub table_name: Option<String>,
    /// Reject table and column names that are not plain SQL identifiers.
    /// Default: false (names are trusted and interpolated as given).
    pub strict_identifiers: Option<bool>,
    /// SQLite busy timeout in milliseconds. Default: 5000.
    pub busy_timeout_ms: Option<u64>,
    /// Create the database file when it does not exist. Default: false.
    pub create_if_missing: Option<bool>,
}

impl WrapConfig {
    /// Config with only the binding set; everything else defaults.
    pub fn new(db_path: impl Into<PathBuf>, table_name: impl Into<String>) -> Self {
        Self {
            db_path: Some(db_path.into()),
            table_name: Some(table_name.into()),
            ..Self::default()
        }
    }

    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> WrapResult<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: &Path) -> WrapResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&raw)?;
        tracing::debug!(path = %path.display(), "loaded wrapper config");
        Ok(config)
    }

    pub fn effective_strict_identifiers(&self) -> bool {
        self.strict_identifiers.unwrap_or(false)
    }

    pub fn effective_busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms.unwrap_or(5000))
    }

    pub fn effective_create_if_missing(&self) -> bool {
        self.create_if_missing.unwrap_or(false)
    }

    /// Resolve the binding. Both `db_path` and `table_name` must be set.
    pub fn binding(&self) -> WrapResult<TableBinding> {
        let (db_path, table) = match (&self.db_path, &self.table_name) {
            (Some(p), Some(t)) if !p.as_os_str().is_empty() && !t.is_empty() => (p.clone(), t.clone()),
            _ => {
                return Err(WrapError::Configuration {
                    message: "both db_path and table_name must be set".to_string(),
                })
            }
        };
        Ok(TableBinding {
            db_path,
            table,
            strict_identifiers: self.effective_strict_identifiers(),
            busy_timeout: self.effective_busy_timeout(),
            create_if_missing: self.effective_create_if_missing(),
        })
    }
}

/// A resolved `{store, table}` binding. Cheap to clone; bindings are
/// independent of each other.
#[derive(Debug, Clone, PartialEq)]
pub struct TableBinding {
    pub db_path: PathBuf,
    pub table: String,
    pub strict_identifiers: bool,
    pub busy_timeout: Duration,
    pub create_if_missing: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_table_is_configuration_error() {
        let cfg = WrapConfig {
            db_path: Some(PathBuf::from("x.db")),
            ..WrapConfig::default()
        };
        assert!(matches!(cfg.binding(), Err(WrapError::Configuration { .. })));
    }

    #[test]
    fn empty_db_path_is_configuration_error() {
        let cfg = WrapConfig::new("", "flights");
        assert!(matches!(cfg.binding(), Err(WrapError::Configuration { .. })));
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let cfg = WrapConfig::from_toml("").unwrap();
        assert!(!cfg.effective_strict_identifiers());
        assert_eq!(cfg.effective_busy_timeout(), Duration::from_millis(5000));
        assert!(cfg.binding().is_err());
    }

    #[test]
    fn full_toml_resolves_binding() {
        let cfg = WrapConfig::from_toml(
            r#"
            db_path = "flights.db"
            table_name = "positions"
            strict_identifiers = true
            busy_timeout_ms = 250
            "#,
        )
        .unwrap();
        let binding = cfg.binding().unwrap();
        assert_eq!(binding.table, "positions");
        assert_eq!(binding.db_path, PathBuf::from("flights.db"));
        assert!(binding.strict_identifiers);
        assert_eq!(binding.busy_timeout, Duration::from_millis(250));
        assert!(!binding.create_if_missing);
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = WrapConfig::from_toml("db_path = [").unwrap_err();
        assert!(matches!(err, WrapError::ConfigParse(_)));
    }
}
