//! Database and connection configuration.
//!
//! Everything here has a working default. Settings can be built in code:
//!
//! ```rust
//! use litetab::{ConnectionConfig, TransactionBehavior};
//! use std::time::Duration;
//!
//! let config = ConnectionConfig::new()
//!     .busy_timeout(Duration::from_secs(5))
//!     .transaction_behavior(TransactionBehavior::Immediate)
//!     .pragma("foreign_keys", "ON");
//! assert_eq!(config.pragmas.len(), 1);
//! ```
//!
//! or loaded from TOML:
//!
//! ```toml
//! file_extension = "sqlite3"
//!
//! [connection]
//! busy_timeout_ms = 5000
//! transaction_behavior = "immediate"
//! pragmas = [["journal_mode", "WAL"], ["foreign_keys", "ON"]]
//!
//! [connection.log]
//! level = "info"
//! max_sql_length = 120
//! ```

use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{OrmError, OrmResult};
use crate::row::{RawRow, Row};

/// Default file extension for database files.
pub const DEFAULT_FILE_EXTENSION: &str = "db";

/// Caller-supplied conversion from a positional row to a named [`Row`].
///
/// Receives the column names the engine reported and the row's values.
pub type RowMapper = Arc<dyn Fn(&[String], RawRow) -> OrmResult<Row> + Send + Sync>;

/// How result rows are shaped.
#[derive(Clone, Default)]
pub enum RowMapping {
    /// Column name → value, in the engine's column order.
    #[default]
    Named,
    /// A caller-supplied mapper.
    Custom(RowMapper),
    /// Positional values only.
    Raw,
}

impl RowMapping {
    /// Wrap a closure as [`RowMapping::Custom`].
    pub fn custom<F>(mapper: F) -> Self
    where
        F: Fn(&[String], RawRow) -> OrmResult<Row> + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(mapper))
    }
}

impl fmt::Debug for RowMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named => f.write_str("Named"),
            Self::Custom(_) => f.write_str("Custom(..)"),
            Self::Raw => f.write_str("Raw"),
        }
    }
}

/// Locking mode of the transaction wrapped around each statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionBehavior {
    #[default]
    Deferred,
    Immediate,
    Exclusive,
}

impl From<TransactionBehavior> for rusqlite::TransactionBehavior {
    fn from(b: TransactionBehavior) -> Self {
        match b {
            TransactionBehavior::Deferred => rusqlite::TransactionBehavior::Deferred,
            TransactionBehavior::Immediate => rusqlite::TransactionBehavior::Immediate,
            TransactionBehavior::Exclusive => rusqlite::TransactionBehavior::Exclusive,
        }
    }
}

/// Level of the per-statement log event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    #[default]
    Debug,
    Trace,
}

/// Statement logging (needs the `tracing` feature).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SqlLogConfig {
    pub enabled: bool,
    pub level: LogLevel,
    /// Truncate long SQL strings (in bytes). `None` means no truncation.
    pub max_sql_length: Option<usize>,
}

impl Default for SqlLogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: LogLevel::Debug,
            max_sql_length: Some(200),
        }
    }
}

/// Settings applied to every connection a [`crate::Database`] opens.
///
/// Connections are not pooled: each statement opens one, runs in its own
/// transaction and closes it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConnectionConfig {
    /// How long to wait on a locked database, in milliseconds.
    pub busy_timeout_ms: Option<u64>,
    /// Open the file read-only.
    pub read_only: bool,
    /// Create the file when it does not exist (ignored when read-only).
    pub create_if_missing: bool,
    /// Parse the file name as a `file:` URI. Off by default, so a plain
    /// name starting with `file:` is still a path.
    pub uri: bool,
    pub transaction_behavior: TransactionBehavior,
    /// `PRAGMA <name> = <value>` statements run after opening, in order.
    /// Values are passed to the engine verbatim.
    pub pragmas: Vec<(String, String)>,
    pub log: SqlLogConfig,
    /// Row shape for data queries. Not loadable from TOML.
    #[serde(skip)]
    pub row_mapping: RowMapping,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            busy_timeout_ms: None,
            read_only: false,
            create_if_missing: true,
            uri: false,
            transaction_behavior: TransactionBehavior::default(),
            pragmas: Vec::new(),
            log: SqlLogConfig::default(),
            row_mapping: RowMapping::default(),
        }
    }
}

impl ConnectionConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout_ms = Some(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX));
        self
    }

    pub fn read_only(mut self, yes: bool) -> Self {
        self.read_only = yes;
        self
    }

    pub fn create_if_missing(mut self, yes: bool) -> Self {
        self.create_if_missing = yes;
        self
    }

    pub fn uri(mut self, yes: bool) -> Self {
        self.uri = yes;
        self
    }

    pub fn transaction_behavior(mut self, behavior: TransactionBehavior) -> Self {
        self.transaction_behavior = behavior;
        self
    }

    /// Append a pragma.
    pub fn pragma(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.pragmas.push((name.into(), value.into()));
        self
    }

    pub fn row_mapping(mut self, mapping: RowMapping) -> Self {
        self.row_mapping = mapping;
        self
    }

    pub fn log(mut self, log: SqlLogConfig) -> Self {
        self.log = log;
        self
    }

    /// Disable statement logging.
    pub fn no_log(mut self) -> Self {
        self.log.enabled = false;
        self
    }

    pub(crate) fn busy_timeout_duration(&self) -> Option<Duration> {
        self.busy_timeout_ms.map(Duration::from_millis)
    }
}

/// Top-level configuration of a [`crate::Database`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Appended to the database name as `<name>.<ext>`.
    pub file_extension: String,
    pub connection: ConnectionConfig,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            file_extension: DEFAULT_FILE_EXTENSION.to_string(),
            connection: ConnectionConfig::default(),
        }
    }
}

impl DatabaseConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file_extension(mut self, ext: impl Into<String>) -> Self {
        self.file_extension = ext.into();
        self
    }

    pub fn connection(mut self, connection: ConnectionConfig) -> Self {
        self.connection = connection;
        self
    }

    /// Parse a TOML document.
    pub fn from_toml_str(raw: &str) -> OrmResult<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> OrmResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            OrmError::config(format!(
                "failed to read config file {}: {e}",
                path.display()
            ))
        })?;
        Self::from_toml_str(&raw)
    }

    fn validate(&self) -> OrmResult<()> {
        if self.file_extension.is_empty() || self.file_extension.contains(['/', '\\']) {
            return Err(OrmError::config(format!(
                "invalid file_extension: {:?}",
                self.file_extension
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = DatabaseConfig::default();
        assert_eq!(config.file_extension, "db");
        assert!(config.connection.create_if_missing);
        assert!(!config.connection.read_only);
        assert!(!config.connection.uri);
        assert!(matches!(config.connection.row_mapping, RowMapping::Named));
        assert_eq!(config.connection.log.max_sql_length, Some(200));
    }

    #[test]
    fn builder_methods() {
        let config = ConnectionConfig::new()
            .busy_timeout(Duration::from_millis(1500))
            .transaction_behavior(TransactionBehavior::Exclusive)
            .pragma("journal_mode", "WAL")
            .pragma("foreign_keys", "ON")
            .no_log();
        assert_eq!(config.busy_timeout_duration(), Some(Duration::from_millis(1500)));
        assert_eq!(config.transaction_behavior, TransactionBehavior::Exclusive);
        assert_eq!(config.pragmas[0], ("journal_mode".into(), "WAL".into()));
        assert_eq!(config.pragmas[1].0, "foreign_keys");
        assert!(!config.log.enabled);
    }

    #[test]
    fn parses_toml() {
        let config = DatabaseConfig::from_toml_str(
            r#"
            file_extension = "sqlite3"

            [connection]
            busy_timeout_ms = 5000
            transaction_behavior = "immediate"
            pragmas = [["journal_mode", "WAL"], ["foreign_keys", "ON"]]

            [connection.log]
            level = "info"
            max_sql_length = 120
            "#,
        )
        .unwrap();
        assert_eq!(config.file_extension, "sqlite3");
        assert_eq!(config.connection.busy_timeout_ms, Some(5000));
        assert_eq!(
            config.connection.transaction_behavior,
            TransactionBehavior::Immediate
        );
        assert_eq!(config.connection.pragmas.len(), 2);
        assert_eq!(config.connection.log.level, LogLevel::Info);
        assert!(config.connection.log.enabled);
        assert_eq!(config.connection.log.max_sql_length, Some(120));
    }

    #[test]
    fn empty_toml_is_default() {
        let config = DatabaseConfig::from_toml_str("").unwrap();
        assert_eq!(config.file_extension, "db");
    }

    #[test]
    fn rejects_bad_toml() {
        let err = DatabaseConfig::from_toml_str(
            "[connection]\ntransaction_behavior = \"sometimes\"",
        )
        .unwrap_err();
        assert!(matches!(err, OrmError::Config(_)));
    }

    #[test]
    fn rejects_bad_extension() {
        let err = DatabaseConfig::from_toml_str(r#"file_extension = "a/b""#).unwrap_err();
        assert!(matches!(err, OrmError::Config(_)));
    }

    #[test]
    fn row_mapping_debug_hides_closure() {
        let mapping = RowMapping::custom(|cols, raw| Ok(Row::from_parts(cols, raw)));
        assert_eq!(format!("{mapping:?}"), "Custom(..)");
    }
}
