//! Table and column name checks.
//!
//! Names are written into statements verbatim and compared against the bare
//! names SQLite stores in `sqlite_master` and `PRAGMA table_info`, so only
//! the plain unquoted form is accepted: `[A-Za-z_][A-Za-z0-9_$]*`.
//! Quoted (`"Odd Name"`) and schema-qualified (`main.users`) names are
//! rejected; their stored name differs from the text that created them.

use crate::error::{OrmError, OrmResult};

/// Whether `name` is a plain unquoted SQL identifier.
pub fn is_plain_ident(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c == '$' || c.is_ascii_alphanumeric())
}

/// Reject anything that is not a plain unquoted identifier.
pub(crate) fn check_ident(name: &str) -> OrmResult<()> {
    if name.is_empty() {
        return Err(OrmError::validation("Identifier cannot be empty"));
    }
    if !is_plain_ident(name) {
        return Err(OrmError::validation(format!(
            "Invalid identifier '{name}': expected a plain unquoted name"
        )));
    }
    Ok(())
}
