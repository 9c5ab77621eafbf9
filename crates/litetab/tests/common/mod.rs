#![allow(dead_code)]

use litetab::{
    BaseType, ConnectionConfig, CreateOptions, Database, DatabaseConfig, Record, Row, Table, Value,
    with_unique,
};
use tempfile::TempDir;

/// A database file inside a fresh temporary directory.
pub struct TestDb {
    pub db: Database,
    _dir: TempDir,
}

impl TestDb {
    pub fn new() -> Self {
        Self::with_connection(ConnectionConfig::new().no_log())
    }

    pub fn with_connection(connection: ConnectionConfig) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let db = Database::open(
            dir.path().join("test"),
            DatabaseConfig::new().connection(connection),
        );
        Self { db, _dir: dir }
    }
}

/// `users (id INTEGER UNIQUE, name TEXT, surname TEXT, is_male BOOL)`
pub fn create_users(db: &Database) -> Table<'_> {
    db.create_table(
        "users",
        [
            ("id", with_unique(BaseType::Integer)),
            ("name", BaseType::Text.into()),
            ("surname", BaseType::Text.into()),
            ("is_male", BaseType::Boolean.into()),
        ],
        CreateOptions::default(),
    )
    .expect("create users")
}

/// Insert the three sample people.
pub fn seed_users(users: &Table<'_>) {
    users
        .insert_row([Value::from(151), "John".into(), "Wisley".into(), true.into()])
        .expect("insert John");
    users
        .insert_row([Value::from(157), "Joe".into(), "Astley".into(), true.into()])
        .expect("insert Joe");
    users
        .insert_row([Value::from(651), "Mary".into(), "Bart".into(), false.into()])
        .expect("insert Mary");
}

pub fn user(id: i64, name: &str, surname: &str, is_male: bool) -> Row {
    Row::new()
        .with("id", id)
        .with("name", name)
        .with("surname", surname)
        .with("is_male", is_male)
}

/// Unwrap a list of mapped records.
pub fn rows(records: Vec<Record>) -> Vec<Row> {
    records
        .into_iter()
        .map(|r| r.into_row().expect("mapped row"))
        .collect()
}
