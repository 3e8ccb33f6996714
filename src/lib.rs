//! model-fields: classify table columns into semantic field categories
//!
//! This library inspects a table's schema metadata and classifies its
//! columns (all, required, nullable, primary-key, database-default and
//! application-default fields) so application code knows at runtime
//! which fields must be supplied when constructing a new record. It
//! normalizes the metadata shapes of four engines (SQLite, MySQL/MariaDB,
//! PostgreSQL, SQL Server) behind one column model, preferring the host's
//! unified schema API and falling back to raw per-engine queries.

pub mod classifier;
pub mod drivers;
pub mod error;
pub mod ext;
pub mod orm;
pub mod output;
pub mod schema;

use anyhow::Result;

pub use classifier::{ClassificationResult, Fields, RequiredFieldOptions};
pub use error::FieldsError;
pub use ext::ModelFieldsExt;

use orm::{Connection, ModelSource};
use output::OutputFormat;

/// A field classification category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldCategory {
    All,
    Required,
    Nullable,
    Primary,
    Default,
    ApplicationDefault,
    DatabaseDefault,
}

impl FieldCategory {
    /// Human label used in CLI output ("required fields", ...).
    pub fn label(&self) -> &'static str {
        match self {
            FieldCategory::All => "all",
            FieldCategory::Required => "required",
            FieldCategory::Nullable => "nullable",
            FieldCategory::Primary => "primary",
            FieldCategory::Default => "default",
            FieldCategory::ApplicationDefault => "application default",
            FieldCategory::DatabaseDefault => "database default",
        }
    }
}

/// Options for a one-call classification
#[derive(Debug, Clone)]
pub struct ClassifyOptions {
    /// Which field category to compute
    pub category: FieldCategory,
    /// How to render the result
    pub format: OutputFormat,
    /// Enable verbose output
    pub verbose: bool,
}

/// Classify a model's fields and render the result
pub fn classify_fields(
    connection: &dyn Connection,
    model: &dyn ModelSource,
    options: &ClassifyOptions,
) -> Result<String> {
    if options.verbose {
        println!(
            "Classifying {} fields for table: {}",
            options.category.label(),
            model.table()
        );
    }

    let service = Fields::new(connection).model(model)?;

    let fields = match options.category {
        FieldCategory::All => service.all_fields()?,
        FieldCategory::Required => service.required_fields()?,
        FieldCategory::Nullable => service.nullable_fields()?,
        FieldCategory::Primary => service.primary_field()?,
        FieldCategory::Default => service.default_fields()?,
        FieldCategory::ApplicationDefault => service.application_default_fields()?,
        FieldCategory::DatabaseDefault => service.database_default_fields()?,
    };

    if options.verbose {
        println!("Matched {} fields", fields.len());
    }

    Ok(output::format_fields(
        &fields,
        options.format,
        options.category.label(),
        &model.table(),
    )?)
}
