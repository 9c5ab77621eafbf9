//! DDL builders: CREATE TABLE, DROP TABLE, ALTER TABLE.

use super::traits::{MutationBuilder, SqlBuilder};
use crate::error::{OrmError, OrmResult};
use crate::ident::check_ident;
use crate::types::ColumnType;

/// CREATE TABLE builder.
///
/// Columns render in the order they were added.
#[derive(Debug, Clone)]
pub struct CreateTableBuilder {
    table: String,
    columns: Vec<(String, ColumnType)>,
    if_not_exists: bool,
    without_rowid: bool,
}

impl CreateTableBuilder {
    /// `IF NOT EXISTS` is on by default, `WITHOUT ROWID` is off.
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            columns: Vec::new(),
            if_not_exists: true,
            without_rowid: false,
        }
    }

    /// Append a column definition.
    pub fn column(&mut self, name: &str, ty: impl Into<ColumnType>) -> &mut Self {
        self.columns.push((name.to_string(), ty.into()));
        self
    }

    /// Append several column definitions, keeping their order.
    pub fn columns<I, S, T>(&mut self, columns: I) -> &mut Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: AsRef<str>,
        T: Into<ColumnType>,
    {
        for (name, ty) in columns {
            self.column(name.as_ref(), ty);
        }
        self
    }

    pub fn if_not_exists(&mut self, yes: bool) -> &mut Self {
        self.if_not_exists = yes;
        self
    }

    pub fn without_rowid(&mut self, yes: bool) -> &mut Self {
        self.without_rowid = yes;
        self
    }

    pub fn table(&self) -> &str {
        &self.table
    }
}

impl SqlBuilder for CreateTableBuilder {
    fn build_sql(&self) -> String {
        let mut sql = String::from("CREATE TABLE ");
        if self.if_not_exists {
            sql.push_str("IF NOT EXISTS ");
        }
        sql.push_str(&self.table);
        sql.push_str(" (");
        for (i, (name, ty)) in self.columns.iter().enumerate() {
            if i > 0 {
                sql.push_str(", ");
            }
            sql.push_str(name);
            sql.push(' ');
            sql.push_str(&ty.to_sql());
        }
        sql.push(')');
        if self.without_rowid {
            sql.push_str(" WITHOUT ROWID");
        }
        sql
    }

    fn validate(&self) -> OrmResult<()> {
        check_ident(&self.table)?;
        if self.columns.is_empty() {
            return Err(OrmError::validation(format!(
                "CREATE TABLE {} has no columns",
                self.table
            )));
        }
        for (name, _) in &self.columns {
            check_ident(name)?;
        }
        Ok(())
    }
}

impl MutationBuilder for CreateTableBuilder {}

/// DROP TABLE builder.
#[derive(Debug, Clone)]
pub struct DropTableBuilder {
    table: String,
    if_exists: bool,
}

impl DropTableBuilder {
    /// `IF EXISTS` is on by default.
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            if_exists: true,
        }
    }

    pub fn if_exists(&mut self, yes: bool) -> &mut Self {
        self.if_exists = yes;
        self
    }
}

impl SqlBuilder for DropTableBuilder {
    fn build_sql(&self) -> String {
        if self.if_exists {
            format!("DROP TABLE IF EXISTS {}", self.table)
        } else {
            format!("DROP TABLE {}", self.table)
        }
    }

    fn validate(&self) -> OrmResult<()> {
        check_ident(&self.table)
    }
}

impl MutationBuilder for DropTableBuilder {}

/// A single ALTER TABLE operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlterAction {
    RenameTo(String),
    AddColumn(String, ColumnType),
    DropColumn(String),
    RenameColumn { from: String, to: String },
}

/// ALTER TABLE builder.
///
/// Holds exactly one action; SQLite applies one change per statement.
/// Nothing checks that the table or column exists.
#[derive(Debug, Clone)]
pub struct AlterTableBuilder {
    table: String,
    action: AlterAction,
}

impl AlterTableBuilder {
    pub fn rename_to(table: &str, new_name: &str) -> Self {
        Self::with_action(table, AlterAction::RenameTo(new_name.to_string()))
    }

    pub fn add_column(table: &str, column: &str, ty: impl Into<ColumnType>) -> Self {
        Self::with_action(table, AlterAction::AddColumn(column.to_string(), ty.into()))
    }

    pub fn drop_column(table: &str, column: &str) -> Self {
        Self::with_action(table, AlterAction::DropColumn(column.to_string()))
    }

    pub fn rename_column(table: &str, from: &str, to: &str) -> Self {
        Self::with_action(
            table,
            AlterAction::RenameColumn {
                from: from.to_string(),
                to: to.to_string(),
            },
        )
    }

    fn with_action(table: &str, action: AlterAction) -> Self {
        Self {
            table: table.to_string(),
            action,
        }
    }

    pub fn action(&self) -> &AlterAction {
        &self.action
    }
}

impl SqlBuilder for AlterTableBuilder {
    fn build_sql(&self) -> String {
        let table = &self.table;
        match &self.action {
            AlterAction::RenameTo(new_name) => format!("ALTER TABLE {table} RENAME TO {new_name}"),
            AlterAction::AddColumn(column, ty) => {
                format!("ALTER TABLE {table} ADD COLUMN {column} {ty}")
            }
            AlterAction::DropColumn(column) => format!("ALTER TABLE {table} DROP COLUMN {column}"),
            AlterAction::RenameColumn { from, to } => {
                format!("ALTER TABLE {table} RENAME COLUMN {from} TO {to}")
            }
        }
    }

    fn validate(&self) -> OrmResult<()> {
        check_ident(&self.table)?;
        match &self.action {
            AlterAction::RenameTo(name)
            | AlterAction::AddColumn(name, _)
            | AlterAction::DropColumn(name) => check_ident(name),
            AlterAction::RenameColumn { from, to } => {
                check_ident(from)?;
                check_ident(to)
            }
        }
    }
}

impl MutationBuilder for AlterTableBuilder {}
