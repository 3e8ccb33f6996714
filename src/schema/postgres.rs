//! PostgreSQL legacy dialect
//!
//! Columns come from `information_schema.columns`; the primary key needs a
//! catalog join across `pg_index`/`pg_class`/`pg_namespace`/`pg_attribute`
//! restricted to the current schema, aggregating member column names per
//! index in `indkey` order. Primary-key membership is folded into the
//! column list afterwards.

use anyhow::Result;

use crate::orm::{Connection, Row};
use crate::schema::column::{Column, PrimaryKey};
use crate::schema::row;

const PRIMARY_KEY_SQL: &str = "
            SELECT
                ic.relname AS name,
                string_agg(a.attname, ',' ORDER BY indseq.ord) AS columns,
                am.amname AS type,
                i.indisunique AS unique,
                i.indisprimary AS primary
            FROM
                pg_index i
                JOIN pg_class tc ON tc.oid = i.indrelid
                JOIN pg_namespace tn ON tn.oid = tc.relnamespace
                JOIN pg_class ic ON ic.oid = i.indexrelid
                JOIN pg_am am ON am.oid = ic.relam
                JOIN LATERAL unnest(i.indkey) WITH ORDINALITY AS indseq(num, ord) ON true
                LEFT JOIN pg_attribute a ON a.attrelid = i.indrelid
                AND a.attnum = indseq.num
            WHERE
                tc.relname = ?
                AND tn.nspname = CURRENT_SCHEMA
            GROUP BY
                ic.relname,
                am.amname,
                i.indisunique,
                i.indisprimary";

const COLUMNS_SQL: &str = "
            SELECT
                is_nullable AS nullable,
                column_name AS name,
                column_default AS default
            FROM
                information_schema.columns
            WHERE
                table_name = ?
            ORDER BY
                ordinal_position ASC";

pub(crate) fn columns(
    conn: &dyn Connection,
    table: &str,
    primary_key: &[String],
) -> Result<Vec<Column>> {
    Ok(columns_from_rows(
        &conn.select(COLUMNS_SQL, &[table])?,
        primary_key,
    ))
}

pub(crate) fn primary_key(conn: &dyn Connection, table: &str) -> Result<PrimaryKey> {
    Ok(primary_key_from_rows(&conn.select(PRIMARY_KEY_SQL, &[table])?))
}

fn columns_from_rows(rows: &[Row], primary_key: &[String]) -> Vec<Column> {
    rows.iter()
        .map(|r| {
            let name = row::text(r, "name").unwrap_or_default();
            let is_primary_key = primary_key.contains(&name);
            Column::new(
                name,
                row::flag(r, "nullable"),
                row::text(r, "default"),
                is_primary_key,
            )
        })
        .collect()
}

fn primary_key_from_rows(rows: &[Row]) -> PrimaryKey {
    let mut members = Vec::new();
    for index in rows.iter().filter(|r| row::flag(r, "primary")) {
        if let Some(columns) = row::text(index, "columns") {
            members.extend(
                columns
                    .split(',')
                    .map(|c| c.trim().to_string())
                    .filter(|c| !c.is_empty()),
            );
        }
    }
    members
}
