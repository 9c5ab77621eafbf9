//! Statement execution.
//!
//! The gateway is the only place that talks to SQLite. Each call:
//!
//! 1. opens a connection to the database file with the configured flags,
//!    busy timeout and pragmas,
//! 2. begins a transaction,
//! 3. runs the statement and collects rows according to [`FetchMode`],
//! 4. commits and closes the connection.
//!
//! Engine errors are returned unchanged as [`OrmError::Engine`].

use std::path::{Path, PathBuf};
use std::time::Instant;

use rusqlite::config::DbConfig;
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags};

use crate::config::{ConnectionConfig, RowMapping};
use crate::error::{OrmError, OrmResult};
use crate::monitor::log_statement;
use crate::row::{RawRow, Record, Row};
use crate::types::BaseType;
use crate::value::Value;

/// How many result rows the caller wants back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    /// Run the statement, return nothing.
    None,
    /// Return the first row, if any.
    One,
    /// Return every row.
    All,
}

/// Rows collected by a gateway call.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched {
    None,
    One(Option<Record>),
    All(Vec<Record>),
}

impl Fetched {
    /// The first record, whatever the fetch mode was.
    pub fn into_one(self) -> Option<Record> {
        match self {
            Self::None => None,
            Self::One(record) => record,
            Self::All(records) => records.into_iter().next(),
        }
    }

    /// All records, whatever the fetch mode was.
    pub fn into_all(self) -> Vec<Record> {
        match self {
            Self::None => Vec::new(),
            Self::One(record) => record.into_iter().collect(),
            Self::All(records) => records,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::None | Self::One(None) => 0,
            Self::One(Some(_)) => 1,
            Self::All(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Opens connections to one database file and executes statements on them.
#[derive(Debug, Clone)]
pub struct Gateway {
    path: PathBuf,
    config: ConnectionConfig,
}

impl Gateway {
    pub fn new(path: impl Into<PathBuf>, config: ConnectionConfig) -> Self {
        Self {
            path: path.into(),
            config,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    fn open_flags(&self) -> OpenFlags {
        let mut base = OpenFlags::SQLITE_OPEN_NO_MUTEX;
        if self.config.uri {
            base |= OpenFlags::SQLITE_OPEN_URI;
        }
        if self.config.read_only {
            base | OpenFlags::SQLITE_OPEN_READ_ONLY
        } else if self.config.create_if_missing {
            base | OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE
        } else {
            base | OpenFlags::SQLITE_OPEN_READ_WRITE
        }
    }

    /// Open a configured connection.
    pub fn connect(&self) -> OrmResult<Connection> {
        let conn = Connection::open_with_flags(&self.path, self.open_flags())?;
        // Text literals are rendered double-quoted.
        conn.set_db_config(DbConfig::SQLITE_DBCONFIG_DQS_DML, true)?;
        conn.set_db_config(DbConfig::SQLITE_DBCONFIG_DQS_DDL, true)?;
        if let Some(timeout) = self.config.busy_timeout_duration() {
            conn.busy_timeout(timeout)?;
        }
        for (name, value) in &self.config.pragmas {
            drain(&conn, &format!("PRAGMA {name} = {value}"))?;
        }
        Ok(conn)
    }

    /// Execute with the configured row mapping.
    pub fn execute(&self, sql: &str, mode: FetchMode) -> OrmResult<Fetched> {
        self.execute_with(sql, mode, &self.config.row_mapping)
    }

    /// Execute one statement in its own transaction and commit.
    pub fn execute_with(
        &self,
        sql: &str,
        mode: FetchMode,
        mapping: &RowMapping,
    ) -> OrmResult<Fetched> {
        let start = Instant::now();
        let mut conn = self.connect()?;
        let tx = conn.transaction_with_behavior(self.config.transaction_behavior.into())?;

        let fetched = {
            let mut stmt = tx.prepare(sql)?;
            let columns: Vec<String> = stmt
                .column_names()
                .into_iter()
                .map(str::to_string)
                .collect();
            let boolean: Vec<bool> = stmt
                .columns()
                .iter()
                .map(|c| c.decl_type().is_some_and(BaseType::is_boolean_decl))
                .collect();
            let decoder = RowDecoder {
                columns: &columns,
                boolean: &boolean,
                mapping,
            };

            let mut rows = stmt.query([])?;
            match mode {
                FetchMode::None => {
                    while rows.next()?.is_some() {}
                    Fetched::None
                }
                FetchMode::One => match rows.next()? {
                    Some(row) => Fetched::One(Some(decoder.decode(row)?)),
                    None => Fetched::One(None),
                },
                FetchMode::All => {
                    let mut out = Vec::new();
                    while let Some(row) = rows.next()? {
                        out.push(decoder.decode(row)?);
                    }
                    Fetched::All(out)
                }
            }
        };

        tx.commit()?;
        log_statement(&self.config.log, sql, mode, fetched.len(), start.elapsed());
        Ok(fetched)
    }
}

/// Run a statement to completion, discarding any rows it returns.
fn drain(conn: &Connection, sql: &str) -> OrmResult<()> {
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query([])?;
    while rows.next()?.is_some() {}
    Ok(())
}

struct RowDecoder<'a> {
    columns: &'a [String],
    /// Columns declared BOOL/BOOLEAN
    boolean: &'a [bool],
    mapping: &'a RowMapping,
}

impl RowDecoder<'_> {
    fn decode(&self, row: &rusqlite::Row<'_>) -> OrmResult<Record> {
        let mut values = Vec::with_capacity(self.columns.len());
        for (idx, column) in self.columns.iter().enumerate() {
            let boolean = self.boolean.get(idx).copied().unwrap_or(false);
            values.push(decode_value(row.get_ref(idx)?, column, boolean)?);
        }
        let raw = RawRow(values);
        Ok(match self.mapping {
            RowMapping::Named => Record::Mapped(Row::from_parts(self.columns, raw)),
            RowMapping::Custom(mapper) => Record::Mapped(mapper(self.columns, raw)?),
            RowMapping::Raw => Record::Raw(raw),
        })
    }
}

fn decode_value(value: ValueRef<'_>, column: &str, boolean: bool) -> OrmResult<Value> {
    Ok(match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) if boolean => Value::Boolean(i != 0),
        ValueRef::Integer(i) => Value::Integer(i),
        ValueRef::Real(f) => Value::Real(f),
        ValueRef::Text(bytes) => match std::str::from_utf8(bytes) {
            Ok(s) => Value::Text(s.to_string()),
            Err(e) => return Err(OrmError::decode(column, e.to_string())),
        },
        ValueRef::Blob(bytes) => Value::Blob(bytes.to_vec()),
    })
}
