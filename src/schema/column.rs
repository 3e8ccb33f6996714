//! Normalized column metadata

/// One physical table column, normalized across engines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub nullable: bool,
    /// Raw default expression or value as reported by the engine, after
    /// normalization of the `NULL` literal quirk.
    pub default: Option<String>,
    pub is_primary_key: bool,
}

impl Column {
    /// Build a column, normalizing the reported default value.
    pub fn new(
        name: String,
        nullable: bool,
        default: Option<String>,
        is_primary_key: bool,
    ) -> Self {
        Self {
            name,
            nullable,
            default: normalize_default(default),
            is_primary_key,
        }
    }
}

/// Ordered column names composing a table's primary key. Usually a single
/// column, but composite keys keep the index-declared order.
pub type PrimaryKey = Vec<String>;

/// MariaDB reports a missing default as the literal text `NULL`, and
/// SQLite echoes an explicit `DEFAULT NULL` the same way. Neither is a
/// real default value.
pub(crate) fn normalize_default(default: Option<String>) -> Option<String> {
    match default {
        Some(value) if value == "NULL" => None,
        other => other,
    }
}
