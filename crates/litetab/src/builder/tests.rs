use super::*;
use crate::types::{BaseType, ColumnType, with_default, with_unique};
use crate::value::Value;

#[test]
fn test_simple_select() {
    let qb = SelectBuilder::new("users");
    assert_eq!(qb.to_sql(), "SELECT * FROM users");
}

#[test]
fn test_select_columns() {
    let mut qb = SelectBuilder::new("users");
    qb.columns(&["id", "name"]);
    assert_eq!(qb.to_sql(), "SELECT id, name FROM users");
}

#[test]
fn test_add_column() {
    let mut qb = SelectBuilder::new("users");
    qb.add_column("name").add_column("COUNT(*)");
    assert_eq!(qb.to_sql(), "SELECT name, COUNT(*) FROM users");
}

#[test]
fn test_select_all_clauses() {
    let mut qb = SelectBuilder::new("users");
    qb.where_clause("money > 1000 AND name = \"John\"")
        .order_by("money DESC")
        .group_by("name")
        .limit(5);
    assert_eq!(
        qb.to_sql(),
        "SELECT * FROM users WHERE money > 1000 AND name = \"John\" ORDER BY money DESC GROUP BY name LIMIT 5"
    );
}

/// Every presence combination yields exactly the present clauses, once each,
/// in WHERE, ORDER BY, GROUP BY, LIMIT order.
#[test]
fn test_all_clause_combinations() {
    for mask in 0u8..16 {
        let mut opts = QueryOptions::new();
        let mut expected = String::from("SELECT * FROM t");
        if mask & 1 != 0 {
            opts = opts.filter("a = 1");
            expected.push_str(" WHERE a = 1");
        }
        if mask & 2 != 0 {
            opts = opts.order_by("b");
            expected.push_str(" ORDER BY b");
        }
        if mask & 4 != 0 {
            opts = opts.group_by("c");
            expected.push_str(" GROUP BY c");
        }
        if mask & 8 != 0 {
            opts = opts.limit(10);
            expected.push_str(" LIMIT 10");
        }

        let mut qb = SelectBuilder::new("t");
        qb.options(opts);
        let sql = qb.to_sql();
        assert_eq!(sql, expected, "mask {mask:04b}");
        for kw in ["WHERE", "ORDER BY", "GROUP BY", "LIMIT"] {
            assert!(sql.matches(kw).count() <= 1, "{kw} repeated in {sql}");
        }
    }
}

#[test]
fn test_select_validates_table() {
    let qb = SelectBuilder::new("users; DROP TABLE users");
    assert!(qb.validate().is_err());
}

#[test]
fn test_create_table_keeps_column_order() {
    let mut qb = CreateTableBuilder::new("users");
    qb.column("id", with_unique(BaseType::Integer))
        .column("name", BaseType::Text)
        .column("surname", BaseType::Text)
        .column("is_male", BaseType::Boolean);
    assert_eq!(
        qb.to_sql(),
        "CREATE TABLE IF NOT EXISTS users (id INTEGER UNIQUE, name TEXT, surname TEXT, is_male BOOL)"
    );
    assert!(qb.validate().is_ok());
}

#[test]
fn test_create_table_flags() {
    let mut qb = CreateTableBuilder::new("kv");
    qb.columns([
        ("k", ColumnType::from(BaseType::Text).primary_key()),
        ("v", ColumnType::from(BaseType::Blob)),
    ])
    .if_not_exists(false)
    .without_rowid(true);
    assert_eq!(
        qb.to_sql(),
        "CREATE TABLE kv (k TEXT PRIMARY KEY, v BLOB) WITHOUT ROWID"
    );
}

#[test]
fn test_create_table_requires_columns() {
    let qb = CreateTableBuilder::new("empty");
    assert!(qb.validate().unwrap_err().is_validation());
}

#[test]
fn test_create_table_rejects_bad_column_name() {
    let mut qb = CreateTableBuilder::new("users");
    qb.column("first name", BaseType::Text);
    assert!(qb.validate().is_err());
}

#[test]
fn test_drop_table() {
    let mut qb = DropTableBuilder::new("users");
    assert_eq!(qb.to_sql(), "DROP TABLE IF EXISTS users");
    qb.if_exists(false);
    assert_eq!(qb.to_sql(), "DROP TABLE users");
}

#[test]
fn test_alter_table_statements() {
    assert_eq!(
        AlterTableBuilder::rename_to("users", "people").to_sql(),
        "ALTER TABLE users RENAME TO people"
    );
    assert_eq!(
        AlterTableBuilder::add_column(
            "users",
            "last_name",
            with_default(BaseType::Text, "Joe").unwrap()
        )
        .to_sql(),
        r#"ALTER TABLE users ADD COLUMN last_name TEXT DEFAULT "Joe""#
    );
    assert_eq!(
        AlterTableBuilder::drop_column("users", "is_male").to_sql(),
        "ALTER TABLE users DROP COLUMN is_male"
    );
    assert_eq!(
        AlterTableBuilder::rename_column("users", "name", "first_name").to_sql(),
        "ALTER TABLE users RENAME COLUMN name TO first_name"
    );
}

#[test]
fn test_alter_table_validates_names() {
    assert!(AlterTableBuilder::rename_to("users", "bad name").validate().is_err());
    assert!(
        AlterTableBuilder::rename_column("users", "name", "1st")
            .validate()
            .is_err()
    );
}

#[test]
fn test_insert_positional_literals() {
    let mut qb = InsertBuilder::new("users");
    qb.value(151).value("John").value("Wisley").value(true);
    assert_eq!(
        qb.to_sql(),
        r#"INSERT INTO users VALUES (151, "John", "Wisley", true)"#
    );
    assert!(qb.validate().is_ok());
}

#[test]
fn test_insert_mixed_values() {
    let mut qb = InsertBuilder::new("t");
    qb.values([Value::from(1.5), Value::Null, Value::from(false)]);
    assert_eq!(qb.to_sql(), "INSERT INTO t VALUES (1.5, NULL, false)");
}

#[test]
fn test_insert_reports_bad_literal() {
    let mut qb = InsertBuilder::new("t");
    qb.value(1).value(r#"a"b"#);
    let err = qb.validate().unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("double quote"));
}

#[test]
fn test_insert_requires_values() {
    assert!(InsertBuilder::new("t").validate().is_err());
}

#[test]
fn test_update_with_where() {
    let mut qb = UpdateBuilder::new("users");
    qb.set("name", "Marie").where_clause("id = 651");
    assert_eq!(qb.to_sql(), r#"UPDATE users SET name="Marie" WHERE id = 651"#);
}

#[test]
fn test_update_keeps_assignment_order() {
    let mut qb = UpdateBuilder::new("users");
    qb.set_all([
        ("surname", Value::from("Bart")),
        ("id", Value::from(7)),
        ("is_male", Value::from(false)),
    ]);
    assert_eq!(
        qb.to_sql(),
        r#"UPDATE users SET surname="Bart", id=7, is_male=false"#
    );
}

#[test]
fn test_update_without_where_targets_every_row() {
    let mut qb = UpdateBuilder::new("users");
    qb.set("is_male", true).where_opt(None);
    assert_eq!(qb.to_sql(), "UPDATE users SET is_male=true");
}

#[test]
fn test_update_requires_set() {
    assert!(UpdateBuilder::new("users").validate().is_err());
}

#[test]
fn test_delete() {
    let mut qb = DeleteBuilder::new("users");
    qb.where_clause(r#"name = "John" AND surname = "Wisley""#);
    assert_eq!(
        qb.to_sql(),
        r#"DELETE FROM users WHERE name = "John" AND surname = "Wisley""#
    );
}

#[test]
fn test_delete_all() {
    let qb = DeleteBuilder::new("users");
    assert_eq!(qb.to_sql(), "DELETE FROM users");
}
