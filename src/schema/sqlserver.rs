//! SQL Server legacy dialect
//!
//! Columns come from `INFORMATION_SCHEMA.COLUMNS` scoped to the current
//! schema; the primary key needs `sys.indexes` joined to
//! `sys.index_columns` and `sys.objects`, filtered to `is_primary_key = 1`.
//! Primary-key membership is folded into the column list afterwards.

use anyhow::Result;

use crate::orm::{Connection, Row};
use crate::schema::column::{Column, PrimaryKey};
use crate::schema::row;

const PRIMARY_KEY_SQL: &str = "
            SELECT
                COL_NAME(ic.object_id, ic.column_id) AS [column]
            FROM
                sys.indexes AS i
                INNER JOIN sys.index_columns AS ic
                    ON i.object_id = ic.object_id
                    AND i.index_id = ic.index_id
                INNER JOIN sys.objects AS o
                    ON i.object_id = o.object_id
            WHERE
                i.is_primary_key = 1
                AND o.name = ?
                AND SCHEMA_NAME(o.schema_id) = schema_name()";

const COLUMNS_SQL: &str = "
            SELECT
                COLUMN_NAME AS name,
                DATA_TYPE AS type,
                CASE WHEN IS_NULLABLE = 'YES' THEN 1 ELSE 0 END AS nullable,
                COLUMN_DEFAULT AS [default]
            FROM
                INFORMATION_SCHEMA.COLUMNS
            WHERE
                TABLE_SCHEMA = SCHEMA_NAME()
                AND TABLE_NAME = ?
            ORDER BY
                ORDINAL_POSITION ASC";

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
    rows.iter()
        .filter_map(|r| row::text(r, "column"))
        .collect()
}
