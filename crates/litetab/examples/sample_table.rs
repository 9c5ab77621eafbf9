//! Walk through the table API on a throwaway database file.
//!
//! Run with: cargo run --example sample_table -p litetab
//!
//! Set RUST_LOG=litetab.sql=debug to see every executed statement.

use litetab::{
    BaseType, CreateOptions, Database, OrmError, OrmResult, QueryOptions, Record, Value,
    with_default, with_unique,
};
use tracing_subscriber::EnvFilter;

fn print_rows(label: &str, records: &[Record]) {
    println!("{label}:");
    for record in records {
        match record.as_row() {
            Some(row) => println!("  {}", row.to_json()),
            None => println!("  {record:?}"),
        }
    }
}

fn main() -> OrmResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let dir = std::env::temp_dir().join("litetab_sample");
    std::fs::create_dir_all(&dir).map_err(|e| OrmError::config(e.to_string()))?;
    let db = Database::new(dir.join("test"));
    db.delete_table("users", true)?;

    let users = db.create_table(
        "users",
        [
            ("id", with_unique(BaseType::Integer)),
            ("name", BaseType::Text.into()),
            ("surname", BaseType::Text.into()),
            ("is_male", BaseType::Boolean.into()),
        ],
        CreateOptions::default(),
    )?;

    users.insert_row([Value::from(151), "John".into(), "Wisley".into(), true.into()])?;
    users.insert_row([Value::from(157), "Joe".into(), "Astley".into(), true.into()])?;
    users.insert_row([Value::from(651), "Mary".into(), "Bart".into(), false.into()])?;
    print_rows("all rows", &users.get_all_rows(&[], &QueryOptions::new())?);

    users.update(Some("id = 651"), [("name", "Marie")])?;
    if let Some(row) = users.get_single_row(&[], "id = 651")? {
        print_rows("id = 651", &[row]);
    }

    users.delete_row(Some(r#"name = "John" AND surname = "Wisley""#))?;
    print_rows("after delete", &users.get_all_rows(&[], &QueryOptions::new())?);

    users.remove_column("is_male")?;
    print_rows(
        "ordered by name",
        &users.get_all_rows(&[], &QueryOptions::new().order_by("name"))?,
    );

    users.rename_column("name", "first_name")?;
    users.add_column("last_name", with_default(BaseType::Text, "Joe")?)?;
    print_rows("final", &users.get_all_rows(&[], &QueryOptions::new())?);

    println!("columns: {:?}", users.columns()?);
    Ok(())
}
