//! Optional trailing clauses for SELECT.

/// Render `"<keyword> <fragment> "`, or nothing when the fragment is absent.
pub fn optional_clause(keyword: &str, fragment: Option<&str>) -> String {
    match fragment {
        Some(fragment) => format!("{keyword} {fragment} "),
        None => String::new(),
    }
}

/// Optional WHERE / ORDER BY / GROUP BY / LIMIT inputs.
///
/// Every field is optional; an absent field omits its clause entirely. The
/// fragments are raw SQL and are not inspected.
///
/// Clauses render in a fixed order: WHERE, ORDER BY, GROUP BY, LIMIT. SQLite
/// expects GROUP BY before ORDER BY, so setting both produces a statement
/// the engine rejects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    pub where_clause: Option<String>,
    pub order_by: Option<String>,
    pub group_by: Option<String>,
    /// Passed through as-is; SQLite treats a negative limit as no limit.
    pub limit: Option<i64>,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the WHERE condition (e.g. `money > 1000 AND name = "John"`).
    pub fn filter(mut self, condition: impl Into<String>) -> Self {
        self.where_clause = Some(condition.into());
        self
    }

    /// Set the ORDER BY fragment (e.g. `name DESC`).
    pub fn order_by(mut self, order: impl Into<String>) -> Self {
        self.order_by = Some(order.into());
        self
    }

    /// Set the GROUP BY fragment.
    pub fn group_by(mut self, group: impl Into<String>) -> Self {
        self.group_by = Some(group.into());
        self
    }

    /// Set the maximum number of rows.
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Copy of these options with the WHERE condition removed.
    pub fn without_filter(&self) -> Self {
        Self {
            where_clause: None,
            ..self.clone()
        }
    }

    /// Render the present clauses in fixed order, each followed by a space.
    pub fn to_clauses(&self) -> String {
        let limit = self.limit.map(|n| n.to_string());
        let mut out = String::new();
        out.push_str(&optional_clause("WHERE", self.where_clause.as_deref()));
        out.push_str(&optional_clause("ORDER BY", self.order_by.as_deref()));
        out.push_str(&optional_clause("GROUP BY", self.group_by.as_deref()));
        out.push_str(&optional_clause("LIMIT", limit.as_deref()));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_fragment_has_trailing_space() {
        assert_eq!(optional_clause("WHERE", Some("id = 1")), "WHERE id = 1 ");
    }

    #[test]
    fn absent_fragment_is_empty() {
        assert_eq!(optional_clause("ORDER BY", None), "");
    }

    #[test]
    fn empty_options_render_nothing() {
        assert_eq!(QueryOptions::new().to_clauses(), "");
    }

    #[test]
    fn largest_limit_renders_as_integer() {
        let opts = QueryOptions::new().limit(i64::MAX);
        assert_eq!(opts.to_clauses(), "LIMIT 9223372036854775807 ");
    }

    #[test]
    fn without_filter_keeps_other_clauses() {
        let opts = QueryOptions::new().filter("id = 1").order_by("name").limit(3);
        let stripped = opts.without_filter();
        assert_eq!(stripped.where_clause, None);
        assert_eq!(stripped.to_clauses(), "ORDER BY name LIMIT 3 ");
    }
}
