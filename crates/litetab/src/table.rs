//! Table handle.

use crate::builder::{
    AlterTableBuilder, DeleteBuilder, InsertBuilder, MutationBuilder, QueryOptions,
    UpdateBuilder,
};
use crate::config::RowMapping;
use crate::database::Database;
use crate::error::{OrmError, OrmResult};
use crate::gateway::FetchMode;
use crate::ident::check_ident;
use crate::row::{ColumnInfo, RawRow, Record};
use crate::types::ColumnType;
use crate::value::Value;

/// A table inside a [`Database`], identified by its current name.
///
/// Obtained from [`Database::get_table`], [`Database::tables`] or
/// [`Database::create_table`]. Handles are not tracked by the database: two
/// handles with the same name address the same table, and renaming through
/// one does not update the other.
#[derive(Debug, Clone)]
pub struct Table<'db> {
    db: &'db Database,
    name: String,
}

impl<'db> Table<'db> {
    pub(crate) fn new(db: &'db Database, name: String) -> Self {
        Self { db, name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn database(&self) -> &'db Database {
        self.db
    }

    fn table_info(&self) -> OrmResult<Vec<RawRow>> {
        check_ident(&self.name)?;
        self.db
            .execute_with(
                &format!("PRAGMA table_info({})", self.name),
                FetchMode::All,
                &RowMapping::Raw,
            )?
            .into_all()
            .into_iter()
            .map(|record| {
                record
                    .into_raw()
                    .ok_or_else(|| OrmError::decode("table_info", "expected a positional row"))
            })
            .collect()
    }

    /// Column names in declaration order.
    pub fn columns(&self) -> OrmResult<Vec<String>> {
        self.table_info()?
            .iter()
            .map(|raw| match raw.get(1) {
                Some(Value::Text(name)) => Ok(name.clone()),
                _ => Err(OrmError::decode("name", "expected column name text")),
            })
            .collect()
    }

    /// Full `PRAGMA table_info` entries.
    pub fn column_info(&self) -> OrmResult<Vec<ColumnInfo>> {
        self.table_info()?.iter().map(ColumnInfo::from_raw).collect()
    }

    /// Rename the table; the handle follows the new name.
    pub fn rename(&mut self, new_name: &str) -> OrmResult<()> {
        AlterTableBuilder::rename_to(&self.name, new_name).execute(self.db)?;
        self.name = new_name.to_string();
        Ok(())
    }

    /// Drop the table (no error if it is already gone).
    pub fn delete(&self) -> OrmResult<()> {
        self.db.delete_table(&self.name, true)
    }

    pub fn add_column(&self, name: &str, ty: impl Into<ColumnType>) -> OrmResult<()> {
        AlterTableBuilder::add_column(&self.name, name, ty).execute(self.db)
    }

    pub fn remove_column(&self, name: &str) -> OrmResult<()> {
        AlterTableBuilder::drop_column(&self.name, name).execute(self.db)
    }

    pub fn rename_column(&self, name: &str, new_name: &str) -> OrmResult<()> {
        AlterTableBuilder::rename_column(&self.name, name, new_name).execute(self.db)
    }

    /// First row matching `where_clause`. An empty column list selects `*`.
    pub fn get_single_row(&self, columns: &[&str], where_clause: &str) -> OrmResult<Option<Record>> {
        let options = QueryOptions::new().filter(where_clause);
        Ok(self
            .db
            .select(columns, &self.name, &options, FetchMode::One)?
            .into_one())
    }

    /// All rows matching `options`. An empty column list selects `*`.
    pub fn get_multiple_rows(
        &self,
        columns: &[&str],
        options: &QueryOptions,
    ) -> OrmResult<Vec<Record>> {
        Ok(self
            .db
            .select(columns, &self.name, options, FetchMode::All)?
            .into_all())
    }

    /// Every row; any WHERE condition in `options` is ignored.
    pub fn get_all_rows(&self, columns: &[&str], options: &QueryOptions) -> OrmResult<Vec<Record>> {
        self.get_multiple_rows(columns, &options.without_filter())
    }

    /// Insert one row. Values must follow the table's column order.
    pub fn insert_row<I, V>(&self, values: I) -> OrmResult<()>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let mut qb = InsertBuilder::new(&self.name);
        qb.values(values);
        qb.execute(self.db)
    }

    /// Assign new values to rows matching `where_clause`.
    ///
    /// `None` updates every row in the table. A text value equal to one of
    /// the table's column names copies that column rather than storing the
    /// text.
    pub fn update<I, S, V>(&self, where_clause: Option<&str>, assignments: I) -> OrmResult<()>
    where
        I: IntoIterator<Item = (S, V)>,
        S: AsRef<str>,
        V: Into<Value>,
    {
        let mut qb = UpdateBuilder::new(&self.name);
        qb.set_all(assignments).where_opt(where_clause);
        qb.execute(self.db)
    }

    /// Delete rows matching `where_clause`.
    ///
    /// `None` deletes every row in the table.
    pub fn delete_row(&self, where_clause: Option<&str>) -> OrmResult<()> {
        let mut qb = DeleteBuilder::new(&self.name);
        qb.where_opt(where_clause);
        qb.execute(self.db)
    }
}
