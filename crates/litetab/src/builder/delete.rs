use super::clause::optional_clause;
use super::traits::{MutationBuilder, SqlBuilder};
use crate::error::OrmResult;
use crate::ident::check_ident;

/// DELETE builder.
///
/// Without a WHERE condition every row in the table is deleted.
#[derive(Debug, Clone)]
pub struct DeleteBuilder {
    /// Table name
    table: String,
    /// Raw WHERE condition
    where_clause: Option<String>,
}

impl DeleteBuilder {
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            where_clause: None,
        }
    }

    /// Restrict the delete to rows matching a raw condition.
    pub fn where_clause(&mut self, condition: &str) -> &mut Self {
        self.where_clause = Some(condition.to_string());
        self
    }

    /// Like [`Self::where_clause`]; `None` deletes every row.
    pub fn where_opt(&mut self, condition: Option<&str>) -> &mut Self {
        self.where_clause = condition.map(str::to_string);
        self
    }
}

impl SqlBuilder for DeleteBuilder {
    fn build_sql(&self) -> String {
        let sql = format!(
            "DELETE FROM {} {}",
            self.table,
            optional_clause("WHERE", self.where_clause.as_deref())
        );
        sql.trim_end().to_string()
    }

    fn validate(&self) -> OrmResult<()> {
        check_ident(&self.table)
    }
}

impl MutationBuilder for DeleteBuilder {}
