//! # litetab
//!
//! A small table/column layer over an embedded SQLite file.
//!
//! ## Features
//!
//! - **SQL explicit**: every operation renders one plain SQL statement; values
//!   are embedded as literals, conditions are raw fragments
//! - **Typed columns**: base types plus chainable `PRIMARY KEY` / `NOT NULL` /
//!   `UNIQUE` / `DEFAULT` modifiers
//! - **Ordered everything**: column definitions, SET assignments and result
//!   rows keep their order
//! - **One statement, one transaction**: each call opens a connection,
//!   executes, commits and closes
//! - **No implicit safety**: UPDATE and DELETE without a condition touch every
//!   row
//!
//! ## Example
//!
//! ```rust,no_run
//! use litetab::{BaseType, CreateOptions, Database, QueryOptions, Value, with_unique};
//!
//! let db = Database::new("test");
//! let users = db.create_table(
//!     "users",
//!     [
//!         ("id", with_unique(BaseType::Integer)),
//!         ("name", BaseType::Text.into()),
//!         ("surname", BaseType::Text.into()),
//!         ("is_male", BaseType::Boolean.into()),
//!     ],
//!     CreateOptions::default(),
//! )?;
//!
//! users.insert_row([Value::from(151), "John".into(), "Wisley".into(), true.into()])?;
//! users.update(Some("id = 151"), [("name", "Johnny")])?;
//!
//! for record in users.get_all_rows(&[], &QueryOptions::new().order_by("name"))? {
//!     println!("{:?}", record.as_row());
//! }
//!
//! users.delete_row(Some(r#"name = "Johnny" AND surname = "Wisley""#))?;
//! # Ok::<(), litetab::OrmError>(())
//! ```

pub mod builder;
pub mod config;
pub mod database;
pub mod error;
pub mod gateway;
pub mod ident;
pub mod literal;
mod monitor;
pub mod row;
pub mod table;
pub mod types;
pub mod value;

pub use builder::{
    AlterAction, AlterTableBuilder, CreateTableBuilder, DeleteBuilder, DropTableBuilder,
    InsertBuilder, MutationBuilder, QueryOptions, SelectBuilder, SqlBuilder, UpdateBuilder,
    optional_clause,
};
pub use config::{
    ConnectionConfig, DatabaseConfig, LogLevel, RowMapper, RowMapping, SqlLogConfig,
    TransactionBehavior,
};
pub use database::{CreateOptions, Database};
pub use error::{OrmError, OrmResult};
pub use gateway::{FetchMode, Fetched, Gateway};
pub use ident::is_plain_ident;
pub use literal::to_sql_literal;
pub use row::{ColumnInfo, RawRow, Record, Row};
pub use table::Table;
pub use types::{
    BaseType, ColumnType, Modifier, with_default, with_not_null, with_primary_key, with_unique,
};
pub use value::Value;
