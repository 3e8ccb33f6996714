//! MySQL / MariaDB legacy dialect
//!
//! A single `INFORMATION_SCHEMA.COLUMNS` query carries everything:
//! nullability from `IS_NULLABLE`, primary-key membership from
//! `COLUMN_KEY = 'PRI'`, and the raw default. MariaDB reports a missing
//! default as the literal text `NULL`, which the normalized [`Column`]
//! drops.

use anyhow::Result;

use crate::orm::{Connection, Row};
use crate::schema::column::{Column, PrimaryKey};
use crate::schema::row;

const COLUMNS_SQL: &str = "
            SELECT
                COLUMN_NAME AS name,
                COLUMN_TYPE AS type,
                IF(IS_NULLABLE = 'YES', 1, 0) AS nullable,
                COLUMN_DEFAULT AS `default`,
                IF(COLUMN_KEY = 'PRI', 1, 0) AS `primary`
            FROM
                INFORMATION_SCHEMA.COLUMNS
            WHERE
                TABLE_SCHEMA = DATABASE()
                AND TABLE_NAME = ?
            ORDER BY
                ORDINAL_POSITION ASC";

pub(crate) fn columns(conn: &dyn Connection, table: &str) -> Result<Vec<Column>> {
    Ok(columns_from_rows(&conn.select(COLUMNS_SQL, &[table])?))
}

pub(crate) fn primary_key(conn: &dyn Connection, table: &str) -> Result<PrimaryKey> {
    Ok(primary_key_from_rows(&conn.select(COLUMNS_SQL, &[table])?))
}

fn columns_from_rows(rows: &[Row]) -> Vec<Column> {
    rows.iter()
        .map(|r| {
            Column::new(
                row::text(r, "name").unwrap_or_default(),
                row::flag(r, "nullable"),
                row::text(r, "default"),
                row::flag(r, "primary"),
            )
        })
        .collect()
}

fn primary_key_from_rows(rows: &[Row]) -> PrimaryKey {
    rows.iter()
        .filter(|r| row::flag(r, "primary"))
        .filter_map(|r| row::text(r, "name"))
        .collect()
}
