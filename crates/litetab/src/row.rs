//! Result row types.
//!
//! Data queries produce [`Row`]s: column name → value, in the order the engine
//! reports columns. Metadata queries produce positional [`RawRow`]s. The two
//! are kept apart; [`Record`] is what the gateway hands back before the
//! caller decides which one it expected.

use serde::Serialize;
use serde::ser::SerializeMap;

use crate::error::{OrmError, OrmResult};
use crate::value::Value;

/// A name-mapped result row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    entries: Vec<(String, Value)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a row by pairing column names with positional values.
    pub fn from_parts(columns: &[String], values: RawRow) -> Self {
        Self {
            entries: columns.iter().cloned().zip(values.0).collect(),
        }
    }

    /// Append a column, keeping insertion order.
    pub fn push(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.entries.push((column.into(), value.into()));
    }

    /// Builder-style [`Self::push`].
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(column, value);
        self
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, v)| v)
    }

    /// Like [`Self::get`] but a missing column is a decode error.
    pub fn try_get(&self, column: &str) -> OrmResult<&Value> {
        self.get(column)
            .ok_or_else(|| OrmError::decode(column, "column not present in row"))
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(name, v)| (name.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// JSON object with keys in column order.
    pub fn to_json(&self) -> serde_json::Value {
        let map = self
            .entries
            .iter()
            .map(|(name, v)| {
                let json = serde_json::to_value(v).unwrap_or(serde_json::Value::Null);
                (name.clone(), json)
            })
            .collect::<serde_json::Map<_, _>>();
        serde_json::Value::Object(map)
    }
}

impl Serialize for Row {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// A positional result row.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RawRow(pub Vec<Value>);

impl RawRow {
    pub fn get(&self, idx: usize) -> Option<&Value> {
        self.0.get(idx)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A row as produced by the gateway under some [`crate::RowMapping`].
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Mapped(Row),
    Raw(RawRow),
}

impl Record {
    /// Column lookup; always `None` for raw records.
    pub fn get(&self, column: &str) -> Option<&Value> {
        match self {
            Self::Mapped(row) => row.get(column),
            Self::Raw(_) => None,
        }
    }

    pub fn as_row(&self) -> Option<&Row> {
        match self {
            Self::Mapped(row) => Some(row),
            Self::Raw(_) => None,
        }
    }

    pub fn into_row(self) -> Option<Row> {
        match self {
            Self::Mapped(row) => Some(row),
            Self::Raw(_) => None,
        }
    }

    pub fn into_raw(self) -> Option<RawRow> {
        match self {
            Self::Raw(raw) => Some(raw),
            Self::Mapped(_) => None,
        }
    }
}

/// One entry of `PRAGMA table_info`: `(cid, name, type, notnull, dflt_value, pk)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnInfo {
    pub cid: i64,
    pub name: String,
    pub decl_type: String,
    pub not_null: bool,
    /// Default value expression as SQL text, if any.
    pub default_value: Option<String>,
    /// 1-based position within the primary key, 0 when not part of it.
    pub pk: i64,
}

impl ColumnInfo {
    /// Decode from the positional tuple SQLite reports.
    pub fn from_raw(raw: &RawRow) -> OrmResult<Self> {
        fn int(raw: &RawRow, idx: usize, column: &str) -> OrmResult<i64> {
            raw.get(idx)
                .and_then(Value::as_i64)
                .ok_or_else(|| OrmError::decode(column, "expected integer"))
        }
        fn text(raw: &RawRow, idx: usize, column: &str) -> OrmResult<String> {
            raw.get(idx)
                .and_then(Value::as_str)
                .map(str::to_string)
                .ok_or_else(|| OrmError::decode(column, "expected text"))
        }

        if raw.len() != 6 {
            return Err(OrmError::decode(
                "table_info",
                format!("expected 6 fields, got {}", raw.len()),
            ));
        }
        let default_value = match raw.get(4) {
            Some(Value::Null) | None => None,
            Some(Value::Text(s)) => Some(s.clone()),
            Some(_) => return Err(OrmError::decode("dflt_value", "expected text or NULL")),
        };
        Ok(Self {
            cid: int(raw, 0, "cid")?,
            name: text(raw, 1, "name")?,
            decl_type: text(raw, 2, "type")?,
            not_null: int(raw, 3, "notnull")? != 0,
            default_value,
            pk: int(raw, 5, "pk")?,
        })
    }
}
