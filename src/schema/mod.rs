//! Column metadata normalization
//!
//! Maps raw, engine-specific schema-introspection output into one
//! normalized shape: the ordered list of [`Column`]s and the table's
//! [`PrimaryKey`]. Two strategies exist: the unified schema API exposed by
//! newer hosts, and a raw-query fallback with one dialect module per
//! engine. Classification rules never see raw rows, only [`TableMetadata`].

mod column;
mod mysql;
mod postgres;
mod row;
mod sqlite;
mod sqlserver;
mod unified;

pub use column::{Column, PrimaryKey};

use crate::error::{FieldsError, Result};
use crate::orm::Connection;

/// Normalized table metadata: ordered columns plus the primary-key set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableMetadata {
    pub columns: Vec<Column>,
    pub primary_key: PrimaryKey,
}

/// Engines with a known legacy SQL dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Driver {
    Sqlite,
    Mysql,
    MariaDb,
    Pgsql,
    Sqlsrv,
}

impl Driver {
    fn from_name(name: &str) -> Result<Self> {
        match name {
            "sqlite" => Ok(Driver::Sqlite),
            "mysql" => Ok(Driver::Mysql),
            "mariadb" => Ok(Driver::MariaDb),
            "pgsql" => Ok(Driver::Pgsql),
            "sqlsrv" => Ok(Driver::Sqlsrv),
            other => Err(FieldsError::UnsupportedDriver {
                driver: other.to_string(),
            }),
        }
    }
}

/// Raw metadata queries key on bare table names; schema-qualified names
/// are rewritten before interpolation.
fn legacy_table_name(table: &str) -> String {
    table.replace('.', "__")
}

/// Load normalized metadata through the per-engine raw-query path.
///
/// Fails with [`FieldsError::UnsupportedDriver`] before issuing any query
/// when the connection reports an engine with no known dialect.
pub fn load_legacy(conn: &dyn Connection, table: &str) -> Result<TableMetadata> {
    let driver = Driver::from_name(conn.driver_name())?;
    let table = legacy_table_name(table);

    let (columns, primary_key) = match driver {
        Driver::Sqlite => (
            sqlite::columns(conn, &table)?,
            sqlite::primary_key(conn, &table)?,
        ),
        Driver::Mysql | Driver::MariaDb => (
            mysql::columns(conn, &table)?,
            mysql::primary_key(conn, &table)?,
        ),
        Driver::Pgsql => {
            let primary_key = postgres::primary_key(conn, &table)?;
            let columns = postgres::columns(conn, &table, &primary_key)?;
            (columns, primary_key)
        }
        Driver::Sqlsrv => {
            let primary_key = sqlserver::primary_key(conn, &table)?;
            let columns = sqlserver::columns(conn, &table, &primary_key)?;
            (columns, primary_key)
        }
    };

    Ok(TableMetadata {
        columns,
        primary_key,
    })
}

/// Load normalized metadata through the unified schema API.
pub fn load_unified(conn: &dyn Connection, table: &str) -> Result<TableMetadata> {
    let primary_key = unified::primary_key(conn, table)?;
    let columns = unified::columns(conn, table, &primary_key)?;
    Ok(TableMetadata {
        columns,
        primary_key,
    })
}
