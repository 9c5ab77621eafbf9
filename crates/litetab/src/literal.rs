//! SQL literal formatting.
//!
//! Values are embedded directly into statement text; nothing is bound as a
//! parameter. The rules are:
//!
//! | Value      | Literal                     |
//! |------------|-----------------------------|
//! | `Integer`  | decimal, unquoted           |
//! | `Real`     | decimal, unquoted           |
//! | `Text`     | `"text"` (no escaping)      |
//! | `Boolean`  | `true` / `false`            |
//! | `Blob`     | bytes as UTF-8, unquoted    |
//! | `Null`     | `NULL`                      |
//!
//! Text containing `"`, blobs that are not UTF-8, and non-finite floats are
//! rejected with [`OrmError::Validation`].
//!
//! A double-quoted token is read by SQLite as an identifier first and only
//! falls back to a string when no column of that name is in scope. Text that
//! equals a column name of the target table (`"name"` in `SET surname="name"`)
//! therefore refers to that column, not to the string. This cannot be
//! detected here; nothing checks the target table's columns.

use crate::error::{OrmError, OrmResult};
use crate::value::Value;

/// Format a value as SQL literal text.
///
/// Text that matches a column name in the statement's scope is read by the
/// engine as that column (see the module docs).
pub fn to_sql_literal(value: &Value) -> OrmResult<String> {
    let mut out = String::new();
    write_sql_literal(value, &mut out)?;
    Ok(out)
}

pub(crate) fn write_sql_literal(value: &Value, out: &mut String) -> OrmResult<()> {
    match value {
        Value::Null => out.push_str("NULL"),
        Value::Integer(i) => out.push_str(&i.to_string()),
        Value::Real(f) => {
            if !f.is_finite() {
                return Err(OrmError::validation(format!(
                    "Cannot format non-finite float {f} as a SQL literal"
                )));
            }
            // `{:?}` keeps the fractional part of integral floats (2.0, not 2).
            out.push_str(&format!("{f:?}"));
        }
        Value::Text(s) => {
            if s.contains('"') {
                return Err(OrmError::validation(format!(
                    "Text literal contains a double quote: {s}"
                )));
            }
            out.push('"');
            out.push_str(s);
            out.push('"');
        }
        Value::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Blob(bytes) => {
            let text = std::str::from_utf8(bytes).map_err(|e| {
                OrmError::validation(format!("Blob literal is not valid UTF-8: {e}"))
            })?;
            out.push_str(text);
        }
    }
    Ok(())
}

/// Format a value, keeping only the validation message on failure.
///
/// Builders record the first formatting failure and report it from
/// `validate()`.
pub(crate) fn literal_or_message(value: &Value) -> Result<String, String> {
    to_sql_literal(value).map_err(|err| match err {
        OrmError::Validation(message) => message,
        other => other.to_string(),
    })
}
