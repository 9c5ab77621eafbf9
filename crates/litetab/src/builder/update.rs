use super::clause::optional_clause;
use super::traits::{MutationBuilder, SqlBuilder};
use crate::error::{OrmError, OrmResult};
use crate::ident::check_ident;
use crate::literal::literal_or_message;
use crate::value::Value;

/// UPDATE builder.
///
/// Assignments render in the order they were added. Without a WHERE
/// condition every row in the table is updated.
#[derive(Debug, Clone)]
pub struct UpdateBuilder {
    /// Table name
    table: String,
    /// SET clauses (column, formatted literal)
    set_fields: Vec<(String, String)>,
    /// Raw WHERE condition
    where_clause: Option<String>,
    /// First value that failed to format
    build_error: Option<String>,
}

impl UpdateBuilder {
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            set_fields: Vec::new(),
            where_clause: None,
            build_error: None,
        }
    }

    /// Set a column.
    ///
    /// Text values are double-quoted literals: a value equal to a column name
    /// of the table assigns that column's current value instead of the text.
    pub fn set(&mut self, column: &str, value: impl Into<Value>) -> &mut Self {
        match literal_or_message(&value.into()) {
            Ok(lit) => self.set_fields.push((column.to_string(), lit)),
            Err(message) => {
                self.build_error.get_or_insert(message);
            }
        }
        self
    }

    /// Set several columns, keeping their order.
    pub fn set_all<I, S, V>(&mut self, assignments: I) -> &mut Self
    where
        I: IntoIterator<Item = (S, V)>,
        S: AsRef<str>,
        V: Into<Value>,
    {
        for (column, value) in assignments {
            self.set(column.as_ref(), value);
        }
        self
    }

    /// Restrict the update to rows matching a raw condition.
    pub fn where_clause(&mut self, condition: &str) -> &mut Self {
        self.where_clause = Some(condition.to_string());
        self
    }

    /// Like [`Self::where_clause`]; `None` leaves the update unrestricted.
    pub fn where_opt(&mut self, condition: Option<&str>) -> &mut Self {
        self.where_clause = condition.map(str::to_string);
        self
    }
}

impl SqlBuilder for UpdateBuilder {
    fn build_sql(&self) -> String {
        let assignments = self
            .set_fields
            .iter()
            .map(|(col, lit)| format!("{col}={lit}"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "UPDATE {} SET {} {}",
            self.table,
            assignments,
            optional_clause("WHERE", self.where_clause.as_deref())
        );
        sql.trim_end().to_string()
    }

    fn validate(&self) -> OrmResult<()> {
        if let Some(err) = &self.build_error {
            return Err(OrmError::Validation(err.clone()));
        }
        check_ident(&self.table)?;
        if self.set_fields.is_empty() {
            return Err(OrmError::validation(format!(
                "UPDATE {} has no SET columns",
                self.table
            )));
        }
        for (col, _) in &self.set_fields {
            check_ident(col)?;
        }
        Ok(())
    }
}

impl MutationBuilder for UpdateBuilder {}
