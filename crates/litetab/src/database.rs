//! Database handle.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::builder::{
    CreateTableBuilder, DropTableBuilder, MutationBuilder, QueryOptions, SelectBuilder,
    SqlBuilder,
};
use crate::config::{ConnectionConfig, DatabaseConfig, RowMapping};
use crate::error::{OrmError, OrmResult};
use crate::gateway::{FetchMode, Fetched, Gateway};
use crate::ident::check_ident;
use crate::table::Table;
use crate::types::ColumnType;
use crate::value::Value;

/// Options for [`Database::create_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateOptions {
    /// Do nothing when the table already exists. Default `true`.
    pub if_not_exists: bool,
    /// Create a `WITHOUT ROWID` table. Default `false`.
    pub without_rowid: bool,
}

impl Default for CreateOptions {
    fn default() -> Self {
        Self {
            if_not_exists: true,
            without_rowid: false,
        }
    }
}

/// A SQLite database file, identified by `<name>.<extension>`.
///
/// Every statement goes through this handle. Nothing is held open between
/// calls.
///
/// # Example
///
/// ```rust,no_run
/// use litetab::{BaseType, CreateOptions, Database, QueryOptions};
///
/// let db = Database::new("app");
/// let users = db.create_table(
///     "users",
///     [("id", BaseType::Integer), ("name", BaseType::Text)],
///     CreateOptions::default(),
/// )?;
/// users.insert_row([litetab::Value::from(1), litetab::Value::from("Ann")])?;
/// let rows = users.get_all_rows(&[], &QueryOptions::new())?;
/// # Ok::<(), litetab::OrmError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Database {
    name: PathBuf,
    gateway: Gateway,
}

impl Database {
    /// Open `<name>.db` with default settings.
    pub fn new(name: impl AsRef<Path>) -> Self {
        Self::open(name, DatabaseConfig::default())
    }

    /// Open `<name>.<extension>` with default connection settings.
    pub fn with_extension(name: impl AsRef<Path>, extension: &str) -> Self {
        Self::open(name, DatabaseConfig::new().file_extension(extension))
    }

    pub fn open(name: impl AsRef<Path>, config: DatabaseConfig) -> Self {
        let name = name.as_ref().to_path_buf();
        let mut file_name = OsString::from(name.as_os_str());
        file_name.push(".");
        file_name.push(&config.file_extension);
        Self {
            name,
            gateway: Gateway::new(file_name, config.connection),
        }
    }

    /// Name without the file extension.
    pub fn name(&self) -> &Path {
        &self.name
    }

    /// Path of the backing file.
    pub fn file_name(&self) -> &Path {
        self.gateway.path()
    }

    pub fn config(&self) -> &ConnectionConfig {
        self.gateway.config()
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    /// Execute a raw statement with the configured row mapping.
    pub fn execute(&self, sql: &str, mode: FetchMode) -> OrmResult<Fetched> {
        self.gateway.execute(sql, mode)
    }

    /// Execute a raw statement with an explicit row mapping.
    pub fn execute_with(
        &self,
        sql: &str,
        mode: FetchMode,
        mapping: &RowMapping,
    ) -> OrmResult<Fetched> {
        self.gateway.execute_with(sql, mode, mapping)
    }

    /// Names of all tables, in `sqlite_master` order.
    pub fn table_names(&self) -> OrmResult<Vec<String>> {
        let records = self
            .execute_with(
                "SELECT name FROM sqlite_master WHERE type = 'table'",
                FetchMode::All,
                &RowMapping::Raw,
            )?
            .into_all();
        records
            .into_iter()
            .map(|record| match record.into_raw().and_then(|raw| raw.0.into_iter().next()) {
                Some(Value::Text(name)) => Ok(name),
                _ => Err(OrmError::decode("name", "expected table name text")),
            })
            .collect()
    }

    /// Handles for every table.
    pub fn tables(&self) -> OrmResult<Vec<Table<'_>>> {
        Ok(self
            .table_names()?
            .into_iter()
            .map(|name| Table::new(self, name))
            .collect())
    }

    /// Handle for an existing table.
    ///
    /// Fails with [`OrmError::TableNotFound`] when no table has this name.
    /// Names that are not plain identifiers are a validation error. Matching
    /// is ASCII case-insensitive, as in SQLite; the handle carries the stored
    /// spelling.
    pub fn get_table(&self, name: &str) -> OrmResult<Table<'_>> {
        check_ident(name)?;
        self.tables()?
            .into_iter()
            .find(|table| table.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| OrmError::table_not_found(name))
    }

    /// Create a table and return its handle.
    ///
    /// Columns are created in iteration order.
    pub fn create_table<I, S, T>(
        &self,
        name: &str,
        columns: I,
        options: CreateOptions,
    ) -> OrmResult<Table<'_>>
    where
        I: IntoIterator<Item = (S, T)>,
        S: AsRef<str>,
        T: Into<ColumnType>,
    {
        let mut qb = CreateTableBuilder::new(name);
        qb.columns(columns)
            .if_not_exists(options.if_not_exists)
            .without_rowid(options.without_rowid);
        qb.execute(self)?;
        self.get_table(name)
    }

    /// Drop a table. With `if_exists` a missing table is not an error.
    pub fn delete_table(&self, name: &str, if_exists: bool) -> OrmResult<()> {
        let mut qb = DropTableBuilder::new(name);
        qb.if_exists(if_exists);
        qb.execute(self)
    }

    /// Run a SELECT. An empty column list selects `*`.
    pub fn select(
        &self,
        columns: &[&str],
        from: &str,
        options: &QueryOptions,
        mode: FetchMode,
    ) -> OrmResult<Fetched> {
        let mut qb = SelectBuilder::new(from);
        qb.columns(columns).options(options.clone());
        qb.fetch(self, mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_appends_extension() {
        let db = Database::new("test");
        assert_eq!(db.name(), Path::new("test"));
        assert_eq!(db.file_name(), Path::new("test.db"));

        let db = Database::with_extension("data/app", "sqlite3");
        assert_eq!(db.file_name(), Path::new("data/app.sqlite3"));
    }

    #[test]
    fn create_options_default() {
        let opts = CreateOptions::default();
        assert!(opts.if_not_exists);
        assert!(!opts.without_rowid);
    }
}
