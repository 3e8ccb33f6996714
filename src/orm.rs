//! Interfaces to the host ORM and connection layer
//!
//! The classifier never talks to a database driver or an ORM directly.
//! Everything it needs from the outside world is behind the two traits in
//! this module: a [`Connection`] that can run read-only metadata queries
//! (and, on newer hosts, expose a unified schema API), and a
//! [`ModelSource`] that names the target table and reports the in-memory
//! attributes a fresh model instance carries before persistence.

use anyhow::Result;
use serde_json::{Map, Value};

/// One raw result row from a metadata query, keyed by the column aliases
/// used in the per-engine dialect SQL.
pub type Row = Map<String, Value>;

/// Column description returned by the unified schema API.
#[derive(Debug, Clone)]
pub struct ColumnDescriptor {
    pub name: String,
    pub nullable: bool,
    pub default: Option<String>,
}

/// Index description returned by the unified schema API.
#[derive(Debug, Clone)]
pub struct IndexDescriptor {
    pub name: String,
    /// Member columns in index-declared order.
    pub columns: Vec<String>,
    pub unique: bool,
    pub primary: bool,
}

/// The active database connection, as exposed by the host application.
pub trait Connection {
    /// Engine identifier: `sqlite`, `mysql`, `mariadb`, `pgsql` or `sqlsrv`.
    fn driver_name(&self) -> &str;

    /// Run a read-only query with positional `?` bindings and return the
    /// raw rows.
    fn select(&self, sql: &str, bindings: &[&str]) -> Result<Vec<Row>>;

    /// Whether the host exposes the unified schema API. When false, the
    /// classifier falls back to raw per-engine metadata queries.
    fn supports_unified_schema_api(&self) -> bool {
        false
    }

    /// List the table's columns through the unified schema API.
    fn schema_columns(&self, _table: &str) -> Result<Vec<ColumnDescriptor>> {
        Err(anyhow::anyhow!(
            "unified schema API is not supported by this connection"
        ))
    }

    /// List the table's indexes through the unified schema API.
    fn schema_indexes(&self, _table: &str) -> Result<Vec<IndexDescriptor>> {
        Err(anyhow::anyhow!(
            "unified schema API is not supported by this connection"
        ))
    }
}

/// A handle to a model (or bare table) in the host ORM.
pub trait ModelSource {
    /// Whether this handle refers to a persistable model type. Checked at
    /// bind time; non-persistable handles are rejected.
    fn is_persistable(&self) -> bool {
        true
    }

    /// The table the model maps to, possibly schema-qualified.
    fn table(&self) -> String;

    /// Attribute names a fresh, unsaved instance already carries values
    /// for, before any database round trip.
    fn default_attribute_names(&self) -> Vec<String> {
        Vec::new()
    }

    /// Attribute names present after firing the creating/saving lifecycle
    /// hooks on a throwaway instance. The classifier diffs this against
    /// [`ModelSource::default_attribute_names`] to find observer-filled
    /// fields; hosts without hooks can keep the default.
    fn pre_persist_attribute_names(&self) -> Vec<String> {
        self.default_attribute_names()
    }
}

/// A bare table handle with no ORM-level defaults or lifecycle hooks.
#[derive(Debug, Clone)]
pub struct TableHandle {
    table: String,
}

impl TableHandle {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
        }
    }
}

impl ModelSource for TableHandle {
    fn table(&self) -> String {
        self.table.clone()
    }
}
