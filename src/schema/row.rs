//! Raw-row value coercion
//!
//! The four engines report the same facts in different primitive shapes:
//! SQLite uses 0/1 integers for `notnull` and `pk`, MySQL's `IF()` aliases
//! produce integers, Postgres returns native booleans next to
//! `'YES'`/`'NO'` strings, and SQL Server's `CASE` expressions produce
//! integers again. These helpers flatten all of that into `bool` and
//! `Option<String>`.

use serde_json::Value;

use crate::orm::Row;

/// Read a string-ish field, rendering numbers as their literal text.
pub(crate) fn text(row: &Row, key: &str) -> Option<String> {
    match row.get(key) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    }
}

/// Read a truthy flag: engine booleans, non-zero numbers, or the string
/// spellings the engines use (`1`, `t`, `true`, `YES`).
pub(crate) fn flag(row: &Row, key: &str) -> bool {
    match row.get(key) {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|v| v != 0.0).unwrap_or(false),
        Some(Value::String(s)) => {
            matches!(s.to_ascii_lowercase().as_str(), "1" | "t" | "true" | "yes")
        }
        _ => false,
    }
}

/// Read an integer field, for ordinal values such as SQLite's `pk`.
pub(crate) fn integer(row: &Row, key: &str) -> Option<i64> {
    match row.get(key) {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.parse().ok(),
        _ => None,
    }
}
