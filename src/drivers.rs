//! Concrete connection adapters
//!
//! The classifier only needs the [`Connection`] trait; hosts bring their
//! own adapters for their engines. [`SqliteConnection`] is the one this
//! crate ships: it backs the CLI and the integration tests, and reports
//! no unified schema API so it exercises the legacy PRAGMA dialect.

use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::types::ValueRef;
use serde_json::{Map, Number, Value};

use crate::orm::{Connection, Row};

/// A rusqlite-backed implementation of the connection collaborator.
pub struct SqliteConnection {
    conn: rusqlite::Connection,
}

impl SqliteConnection {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = rusqlite::Connection::open(path)
            .with_context(|| format!("failed to open sqlite database: {}", path.display()))?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        Ok(Self {
            conn: rusqlite::Connection::open_in_memory()?,
        })
    }

    /// Run statements that return no rows (schema setup in tests/tools).
    pub fn execute_batch(&self, sql: &str) -> Result<()> {
        self.conn.execute_batch(sql)?;
        Ok(())
    }

    /// Whether a table of this name exists in the database.
    pub fn table_exists(&self, table: &str) -> Result<bool> {
        let rows = self.select(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?",
            &[table],
        )?;
        Ok(!rows.is_empty())
    }
}

impl Connection for SqliteConnection {
    fn driver_name(&self) -> &str {
        "sqlite"
    }

    fn select(&self, sql: &str, bindings: &[&str]) -> Result<Vec<Row>> {
        let mut statement = self.conn.prepare(sql)?;
        let column_names: Vec<String> = statement
            .column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();

        let mut rows = statement.query(rusqlite::params_from_iter(bindings))?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            let mut record = Map::new();
            for (i, name) in column_names.iter().enumerate() {
                record.insert(name.clone(), json_value(row.get_ref(i)?));
            }
            records.push(record);
        }
        Ok(records)
    }
}

fn json_value(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::Number(i.into()),
        ValueRef::Real(f) => Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null),
        ValueRef::Text(t) => Value::String(String::from_utf8_lossy(t).into_owned()),
        // Metadata queries never yield blobs; treat one as missing.
        ValueRef::Blob(_) => Value::Null,
    }
}
