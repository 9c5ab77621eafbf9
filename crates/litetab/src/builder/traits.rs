use crate::database::Database;
use crate::error::OrmResult;
use crate::gateway::{FetchMode, Fetched};

/// Base trait for SQL builders.
pub trait SqlBuilder {
    /// Build the SQL string.
    fn build_sql(&self) -> String;

    /// Debug helper.
    fn to_sql(&self) -> String {
        self.build_sql()
    }

    /// Validate builder state.
    fn validate(&self) -> OrmResult<()> {
        Ok(())
    }

    /// Validate, build and execute against `db`, collecting rows per `mode`.
    fn fetch(&self, db: &Database, mode: FetchMode) -> OrmResult<Fetched> {
        self.validate()?;
        db.execute(&self.build_sql(), mode)
    }
}

/// Trait for statements that return no rows (DDL, INSERT/UPDATE/DELETE).
pub trait MutationBuilder: SqlBuilder {
    /// Execute and discard any result rows.
    fn execute(&self, db: &Database) -> OrmResult<()> {
        self.fetch(db, FetchMode::None).map(|_| ())
    }
}
