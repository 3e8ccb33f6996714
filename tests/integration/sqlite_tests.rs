//! End-to-end classification against live SQLite databases

use pretty_assertions::assert_eq;

use model_fields::drivers::SqliteConnection;
use model_fields::orm::TableHandle;
use model_fields::output::OutputFormat;
use model_fields::{
    classify_fields, ClassifyOptions, Fields, FieldCategory, ModelFieldsExt,
};

use crate::common::FakeModel;

fn father_db() -> SqliteConnection {
    let conn = SqliteConnection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE fathers (
            id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
            active INTEGER NOT NULL DEFAULT 1,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            username TEXT,
            created_at TEXT,
            updated_at TEXT,
            deleted_at TEXT
        );",
    )
    .unwrap();
    conn
}

#[test]
fn test_father_table_classifications() {
    let conn = father_db();
    let model = TableHandle::new("fathers");
    let service = Fields::new(&conn).model(&model).unwrap();

    assert_eq!(
        service.all_fields().unwrap(),
        vec![
            "id",
            "active",
            "name",
            "email",
            "username",
            "created_at",
            "updated_at",
            "deleted_at"
        ]
    );
    assert_eq!(service.required_fields().unwrap(), vec!["name", "email"]);
    assert_eq!(
        service.nullable_fields().unwrap(),
        vec!["username", "created_at", "updated_at", "deleted_at"]
    );
    assert_eq!(service.primary_field().unwrap(), vec!["id"]);
    assert_eq!(service.database_default_fields().unwrap(), vec!["active"]);
    assert_eq!(service.default_fields().unwrap(), vec!["active"]);
}

#[test]
fn test_composite_primary_key_follows_key_order_not_declaration_order() {
    let conn = SqliteConnection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE order_lines (
            order_id INTEGER NOT NULL,
            line INTEGER NOT NULL,
            sku TEXT NOT NULL,
            PRIMARY KEY (line, order_id)
        );",
    )
    .unwrap();
    let model = TableHandle::new("order_lines");
    let service = Fields::new(&conn).model(&model).unwrap();

    assert_eq!(service.primary_field().unwrap(), vec!["line", "order_id"]);
    assert_eq!(service.required_fields().unwrap(), vec!["sku"]);
}

#[test]
fn test_explicit_default_null_is_not_a_database_default() {
    let conn = SqliteConnection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE notes (
            id INTEGER NOT NULL PRIMARY KEY,
            body TEXT DEFAULT NULL,
            state TEXT NOT NULL DEFAULT 'open'
        );",
    )
    .unwrap();
    let model = TableHandle::new("notes");
    let service = Fields::new(&conn).model(&model).unwrap();

    assert_eq!(service.database_default_fields().unwrap(), vec!["state"]);
    assert_eq!(service.nullable_fields().unwrap(), vec!["body"]);
    assert_eq!(
        service.all_fields().unwrap(),
        vec!["id", "body", "state"]
    );
}

#[test]
fn test_model_defaults_exclude_columns_from_required() {
    let conn = SqliteConnection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE brothers (
            email TEXT NOT NULL,
            name TEXT NOT NULL,
            number TEXT
        );",
    )
    .unwrap();
    let model = FakeModel::for_table("brothers").with_defaults(&["name", "bogus"]);
    let service = Fields::new(&conn).model(&model).unwrap();

    assert_eq!(service.required_fields().unwrap(), vec!["email"]);
    assert_eq!(service.application_default_fields().unwrap(), vec!["name"]);
    assert_eq!(service.default_fields().unwrap(), vec!["name"]);
}

#[test]
fn test_observer_filled_columns_are_not_required() {
    let conn = SqliteConnection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE uncles (
            boot_creating TEXT NOT NULL,
            boot_saving TEXT NOT NULL,
            observer_creating TEXT NOT NULL,
            title TEXT NOT NULL
        );",
    )
    .unwrap();
    let model = FakeModel::for_table("uncles").with_hooked(&[
        "boot_creating",
        "boot_saving",
        "observer_creating",
        "not_a_column",
    ]);
    let service = Fields::new(&conn).model(&model).unwrap();

    assert_eq!(
        service.observer_filled_fields().unwrap(),
        vec!["boot_creating", "boot_saving", "observer_creating"]
    );
    assert_eq!(service.required_fields().unwrap(), vec!["title"]);
}

#[test]
fn test_extension_methods_on_a_table_handle() {
    let conn = father_db();
    let fathers = TableHandle::new("fathers");

    assert_eq!(fathers.required_fields(&conn).unwrap(), vec!["name", "email"]);
    assert_eq!(fathers.primary_field(&conn).unwrap(), vec!["id"]);
    assert_eq!(fathers.database_default_fields(&conn).unwrap(), vec!["active"]);
}

#[test]
fn test_schema_qualified_table_names_hit_the_rewritten_table() {
    let conn = SqliteConnection::open_in_memory().unwrap();
    conn.execute_batch("CREATE TABLE audit__events (id INTEGER NOT NULL PRIMARY KEY);")
        .unwrap();
    let model = TableHandle::new("audit.events");
    let service = Fields::new(&conn).model(&model).unwrap();

    assert_eq!(service.all_fields().unwrap(), vec!["id"]);
}

#[test]
fn test_classify_fields_renders_each_format() {
    let conn = father_db();
    let model = TableHandle::new("fathers");

    let list = classify_fields(
        &conn,
        &model,
        &ClassifyOptions {
            category: FieldCategory::Required,
            format: OutputFormat::List,
            verbose: false,
        },
    )
    .unwrap();
    assert_eq!(list, "fathers required fields:\n  - name\n  - email\n");

    let json = classify_fields(
        &conn,
        &model,
        &ClassifyOptions {
            category: FieldCategory::Required,
            format: OutputFormat::Json,
            verbose: false,
        },
    )
    .unwrap();
    let parsed: Vec<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, vec!["name", "email"]);

    let table = classify_fields(
        &conn,
        &model,
        &ClassifyOptions {
            category: FieldCategory::Primary,
            format: OutputFormat::Table,
            verbose: false,
        },
    )
    .unwrap();
    assert!(table.contains("| fathers primary fields |"));
    assert!(table.contains("| id"));
}

#[test]
fn test_empty_category_is_a_message_not_an_error() {
    let conn = SqliteConnection::open_in_memory().unwrap();
    conn.execute_batch("CREATE TABLE loose (note TEXT);").unwrap();

    let rendered = classify_fields(
        &conn,
        &TableHandle::new("loose"),
        &ClassifyOptions {
            category: FieldCategory::Primary,
            format: OutputFormat::List,
            verbose: false,
        },
    )
    .unwrap();
    assert_eq!(rendered, "No primary fields found for loose.");
}

#[test]
fn test_file_backed_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.db");

    let setup = SqliteConnection::open(&path).unwrap();
    setup
        .execute_batch("CREATE TABLE posts (id INTEGER NOT NULL PRIMARY KEY, title TEXT NOT NULL);")
        .unwrap();
    drop(setup);

    let conn = SqliteConnection::open(&path).unwrap();
    assert!(conn.table_exists("posts").unwrap());
    let model = TableHandle::new("posts");
    let service = Fields::new(&conn).model(&model).unwrap();
    assert_eq!(service.required_fields().unwrap(), vec!["title"]);
}
