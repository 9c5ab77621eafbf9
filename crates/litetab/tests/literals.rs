//! Literal values written through the engine and read back.

mod common;

use common::{TestDb, create_users, seed_users};
use litetab::{BaseType, CreateOptions, QueryOptions, Value};

#[test]
fn every_scalar_kind_reads_back() {
    let t = TestDb::new();
    let samples = t
        .db
        .create_table(
            "samples",
            [
                ("r", BaseType::Real),
                ("t", BaseType::Text),
                ("i", BaseType::Integer),
            ],
            CreateOptions::default(),
        )
        .unwrap();

    samples
        .insert_row([Value::Real(2.0), Value::Null, Value::Blob(b"42".to_vec())])
        .unwrap();
    samples
        .insert_row([Value::Real(0.1), Value::from("text"), Value::from(-7)])
        .unwrap();

    let rows = samples
        .get_all_rows(
            &["r", "typeof(r) AS r_kind", "t", "i"],
            &QueryOptions::new().order_by("r DESC"),
        )
        .unwrap();
    assert_eq!(rows.len(), 2);

    let first = rows[0].as_row().unwrap();
    assert_eq!(first.get("r"), Some(&Value::Real(2.0)));
    assert_eq!(first.get("r_kind"), Some(&Value::from("real")));
    assert_eq!(first.get("t"), Some(&Value::Null));
    assert_eq!(first.get("i"), Some(&Value::Integer(42)));

    let second = rows[1].as_row().unwrap();
    assert_eq!(second.get("r"), Some(&Value::Real(0.1)));
    assert_eq!(second.get("t"), Some(&Value::from("text")));
    assert_eq!(second.get("i"), Some(&Value::Integer(-7)));
}

#[test]
fn largest_limit_is_accepted() {
    let t = TestDb::new();
    let users = create_users(&t.db);
    seed_users(&users);

    let all = users
        .get_multiple_rows(&[], &QueryOptions::new().limit(i64::MAX))
        .unwrap();
    assert_eq!(all.len(), 3);
}

// A double-quoted value naming a column in scope refers to that column.
#[test]
fn text_equal_to_a_column_name_reads_as_that_column() {
    let t = TestDb::new();
    let users = create_users(&t.db);
    seed_users(&users);

    users.update(Some("id = 151"), [("surname", "name")]).unwrap();
    let row = users
        .get_single_row(&["surname"], "id = 151")
        .unwrap()
        .unwrap();
    assert_eq!(row.get("surname"), Some(&Value::from("John")));

    // Every row compares its column with itself.
    let matched = users
        .get_multiple_rows(&[], &QueryOptions::new().filter(r#"surname = "surname""#))
        .unwrap();
    assert_eq!(matched.len(), 3);

    // Text that names no column in scope stays a string.
    users.update(Some("id = 157"), [("surname", "nobody")]).unwrap();
    let row = users
        .get_single_row(&["surname"], "id = 157")
        .unwrap()
        .unwrap();
    assert_eq!(row.get("surname"), Some(&Value::from("nobody")));
}

#[test]
fn insert_values_have_no_column_scope() {
    let t = TestDb::new();
    let users = create_users(&t.db);
    users
        .insert_row([Value::from(1), "name".into(), "surname".into(), false.into()])
        .unwrap();

    let row = users.get_single_row(&["name", "surname"], "id = 1").unwrap().unwrap();
    assert_eq!(row.get("name"), Some(&Value::from("name")));
    assert_eq!(row.get("surname"), Some(&Value::from("surname")));
}
