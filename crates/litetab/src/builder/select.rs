use super::clause::QueryOptions;
use super::traits::SqlBuilder;
use crate::error::OrmResult;
use crate::ident::check_ident;

/// SELECT builder.
///
/// Columns are raw expressions (`name`, `COUNT(*)`); with none given the
/// statement selects `*`.
#[derive(Debug, Clone)]
pub struct SelectBuilder {
    /// Source table
    table: String,
    /// SELECT columns (empty means `*`)
    select_cols: Vec<String>,
    /// WHERE / ORDER BY / GROUP BY / LIMIT
    options: QueryOptions,
}

impl SelectBuilder {
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            select_cols: Vec::new(),
            options: QueryOptions::default(),
        }
    }

    /// Replace the SELECT column list.
    pub fn columns<S: AsRef<str>>(&mut self, cols: &[S]) -> &mut Self {
        self.select_cols = cols.iter().map(|c| c.as_ref().to_string()).collect();
        self
    }

    /// Append one SELECT column.
    pub fn add_column(&mut self, col: &str) -> &mut Self {
        self.select_cols.push(col.to_string());
        self
    }

    /// Replace all optional clauses at once.
    pub fn options(&mut self, options: QueryOptions) -> &mut Self {
        self.options = options;
        self
    }

    pub fn where_clause(&mut self, condition: &str) -> &mut Self {
        self.options.where_clause = Some(condition.to_string());
        self
    }

    pub fn order_by(&mut self, order: &str) -> &mut Self {
        self.options.order_by = Some(order.to_string());
        self
    }

    pub fn group_by(&mut self, group: &str) -> &mut Self {
        self.options.group_by = Some(group.to_string());
        self
    }

    pub fn limit(&mut self, limit: i64) -> &mut Self {
        self.options.limit = Some(limit);
        self
    }
}

impl SqlBuilder for SelectBuilder {
    fn build_sql(&self) -> String {
        let cols = if self.select_cols.is_empty() {
            "*".to_string()
        } else {
            self.select_cols.join(", ")
        };
        let sql = format!(
            "SELECT {} FROM {} {}",
            cols,
            self.table,
            self.options.to_clauses()
        );
        sql.trim_end().to_string()
    }

    fn validate(&self) -> OrmResult<()> {
        check_ident(&self.table)
    }
}
