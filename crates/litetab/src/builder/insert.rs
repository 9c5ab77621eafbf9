use super::traits::{MutationBuilder, SqlBuilder};
use crate::error::{OrmError, OrmResult};
use crate::ident::check_ident;
use crate::literal::literal_or_message;
use crate::value::Value;

/// Positional INSERT builder.
///
/// Values must follow the table's declared column order. Arity and types are
/// not checked here; the engine reports mismatches.
#[derive(Debug, Clone)]
pub struct InsertBuilder {
    table: String,
    /// Formatted literals, in insertion order
    literals: Vec<String>,
    /// First literal that failed to format
    build_error: Option<String>,
}

impl InsertBuilder {
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            literals: Vec::new(),
            build_error: None,
        }
    }

    /// Append the next positional value.
    pub fn value(&mut self, value: impl Into<Value>) -> &mut Self {
        match literal_or_message(&value.into()) {
            Ok(lit) => self.literals.push(lit),
            Err(message) => {
                self.build_error.get_or_insert(message);
            }
        }
        self
    }

    /// Append several positional values.
    pub fn values<I, V>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        for v in values {
            self.value(v);
        }
        self
    }
}

impl SqlBuilder for InsertBuilder {
    fn build_sql(&self) -> String {
        format!(
            "INSERT INTO {} VALUES ({})",
            self.table,
            self.literals.join(", ")
        )
    }

    fn validate(&self) -> OrmResult<()> {
        if let Some(err) = &self.build_error {
            return Err(OrmError::Validation(err.clone()));
        }
        check_ident(&self.table)?;
        if self.literals.is_empty() {
            return Err(OrmError::validation(format!(
                "INSERT INTO {} has no values",
                self.table
            )));
        }
        Ok(())
    }
}

impl MutationBuilder for InsertBuilder {}
