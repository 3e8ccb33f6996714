//! Unified schema API path
//!
//! Used when the host connection can describe columns and indexes without
//! engine-specific SQL. Descriptors arrive already typed; this adapter
//! only filters primary indexes, flattens their column lists, and folds
//! key membership into the normalized columns.

use anyhow::Result;

use crate::orm::Connection;
use crate::schema::column::{Column, PrimaryKey};

pub(crate) fn columns(
    conn: &dyn Connection,
    table: &str,
    primary_key: &[String],
) -> Result<Vec<Column>> {
    let descriptors = conn.schema_columns(table)?;
    Ok(descriptors
        .into_iter()
        .map(|d| {
            let is_primary_key = primary_key.contains(&d.name);
            Column::new(d.name, d.nullable, d.default, is_primary_key)
        })
        .collect())
}

pub(crate) fn primary_key(conn: &dyn Connection, table: &str) -> Result<PrimaryKey> {
    let indexes = conn.schema_indexes(table)?;
    Ok(indexes
        .into_iter()
        .filter(|index| index.primary)
        .flat_map(|index| index.columns)
        .collect())
}
