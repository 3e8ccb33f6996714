//! SQLite legacy dialect
//!
//! Everything comes out of a single `PRAGMA table_info(<table>)` call:
//! `notnull` is a 0/1 flag (inverted for nullability), `dflt_value` holds
//! the raw default text, and `pk` is the 1-based ordinal of the column
//! within the primary key (0 when not a member).

use anyhow::Result;

use crate::orm::{Connection, Row};
use crate::schema::column::{Column, PrimaryKey};
use crate::schema::row;

pub(crate) fn columns(conn: &dyn Connection, table: &str) -> Result<Vec<Column>> {
    Ok(columns_from_rows(&table_info(conn, table)?))
}

pub(crate) fn primary_key(conn: &dyn Connection, table: &str) -> Result<PrimaryKey> {
    Ok(primary_key_from_rows(&table_info(conn, table)?))
}

fn table_info(conn: &dyn Connection, table: &str) -> Result<Vec<Row>> {
    conn.select(&format!("PRAGMA table_info({})", table), &[])
}

fn columns_from_rows(rows: &[Row]) -> Vec<Column> {
    rows.iter()
        .map(|r| {
            Column::new(
                row::text(r, "name").unwrap_or_default(),
                !row::flag(r, "notnull"),
                row::text(r, "dflt_value"),
                row::flag(r, "pk"),
            )
        })
        .collect()
}

fn primary_key_from_rows(rows: &[Row]) -> PrimaryKey {
    let mut members: Vec<(i64, String)> = rows
        .iter()
        .filter(|r| row::flag(r, "pk"))
        .filter_map(|r| Some((row::integer(r, "pk")?, row::text(r, "name")?)))
        .collect();
    members.sort_by_key(|(ordinal, _)| *ordinal);
    members.into_iter().map(|(_, name)| name).collect()
}
