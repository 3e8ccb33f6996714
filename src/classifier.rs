//! Field classification rules
//!
//! [`Fields`] is the classification service: construct it over the active
//! connection, bind a model, then ask for field categories. Every
//! operation loads fresh metadata through the normalizer (the unified
//! schema API when the host supports it, otherwise the per-engine
//! raw-query path) and applies its rule to the normalized shape. Nothing
//! is cached between calls.
//!
//! Every operation also has a `*_for_older_versions` counterpart that
//! forces the raw-query path; the plain operation dispatches to the same
//! rule either way, so both paths always agree on the ruleset.

use std::collections::HashSet;

use crate::error::{FieldsError, Result};
use crate::orm::{Connection, ModelSource};
use crate::schema::{self, TableMetadata};

/// An ordered, deduplicated list of column names, the return shape of
/// every classification operation.
pub type ClassificationResult = Vec<String>;

/// Flags that relax the required-field rejection rules.
///
/// Each flag, when set, stops excluding that kind of column;
/// `with_primary_key` additionally prepends the key columns to the
/// result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequiredFieldOptions {
    pub with_nullables: bool,
    pub with_defaults: bool,
    pub with_primary_key: bool,
}

/// The field classification service.
pub struct Fields<'a> {
    connection: &'a dyn Connection,
    model: Option<&'a dyn ModelSource>,
}

impl<'a> Fields<'a> {
    /// Create an unbound classifier over the active connection.
    pub fn new(connection: &'a dyn Connection) -> Self {
        Self {
            connection,
            model: None,
        }
    }

    /// Bind the model to classify fields for.
    ///
    /// Fails with [`FieldsError::InvalidModel`] when the handle is not a
    /// persistable model type. Every classification operation fails with
    /// [`FieldsError::MissingModel`] until this has succeeded.
    pub fn model(mut self, model: &'a dyn ModelSource) -> Result<Self> {
        if !model.is_persistable() {
            return Err(FieldsError::InvalidModel);
        }
        self.model = Some(model);
        Ok(self)
    }

    /// Every column name, in physical column order.
    pub fn all_fields(&self) -> Result<ClassificationResult> {
        Ok(all_names(&self.metadata()?))
    }

    pub fn all_fields_for_older_versions(&self) -> Result<ClassificationResult> {
        Ok(all_names(&self.legacy_metadata()?))
    }

    /// Columns the caller must supply on insert: not nullable, no database
    /// default, not part of the primary key, and not pre-filled by the
    /// model's default attributes or its pre-persist hooks.
    pub fn required_fields(&self) -> Result<ClassificationResult> {
        self.required_fields_with(RequiredFieldOptions::default())
    }

    pub fn required_fields_for_older_versions(&self) -> Result<ClassificationResult> {
        self.required_fields_with_for_older_versions(RequiredFieldOptions::default())
    }

    /// Generalized required-fields rule, see [`RequiredFieldOptions`].
    pub fn required_fields_with(
        &self,
        options: RequiredFieldOptions,
    ) -> Result<ClassificationResult> {
        let model = self.bound()?;
        Ok(required_names(&self.metadata()?, model, options))
    }

    pub fn required_fields_with_for_older_versions(
        &self,
        options: RequiredFieldOptions,
    ) -> Result<ClassificationResult> {
        let model = self.bound()?;
        Ok(required_names(&self.legacy_metadata()?, model, options))
    }

    pub fn required_fields_with_nullables(&self) -> Result<ClassificationResult> {
        self.required_fields_with(RequiredFieldOptions {
            with_nullables: true,
            ..Default::default()
        })
    }

    pub fn required_fields_with_defaults(&self) -> Result<ClassificationResult> {
        self.required_fields_with(RequiredFieldOptions {
            with_defaults: true,
            ..Default::default()
        })
    }

    pub fn required_fields_with_primary_key(&self) -> Result<ClassificationResult> {
        self.required_fields_with(RequiredFieldOptions {
            with_primary_key: true,
            ..Default::default()
        })
    }

    pub fn required_fields_with_nullables_and_defaults(&self) -> Result<ClassificationResult> {
        self.required_fields_with(RequiredFieldOptions {
            with_nullables: true,
            with_defaults: true,
            ..Default::default()
        })
    }

    pub fn required_fields_with_nullables_and_primary_key(&self) -> Result<ClassificationResult> {
        self.required_fields_with(RequiredFieldOptions {
            with_nullables: true,
            with_primary_key: true,
            ..Default::default()
        })
    }

    pub fn required_fields_with_defaults_and_primary_key(&self) -> Result<ClassificationResult> {
        self.required_fields_with(RequiredFieldOptions {
            with_defaults: true,
            with_primary_key: true,
            ..Default::default()
        })
    }

    /// Columns that accept NULL.
    pub fn nullable_fields(&self) -> Result<ClassificationResult> {
        Ok(nullable_names(&self.metadata()?))
    }

    pub fn nullable_fields_for_older_versions(&self) -> Result<ClassificationResult> {
        Ok(nullable_names(&self.legacy_metadata()?))
    }

    /// The primary-key columns, in index-declared order.
    pub fn primary_field(&self) -> Result<ClassificationResult> {
        Ok(dedup(self.metadata()?.primary_key))
    }

    pub fn primary_field_for_older_versions(&self) -> Result<ClassificationResult> {
        Ok(dedup(self.legacy_metadata()?.primary_key))
    }

    /// Columns with a schema-level default, excluding primary-key columns
    /// (auto-increment and sequence defaults are not reported).
    pub fn database_default_fields(&self) -> Result<ClassificationResult> {
        Ok(database_default_names(&self.metadata()?))
    }

    pub fn database_default_fields_for_older_versions(&self) -> Result<ClassificationResult> {
        Ok(database_default_names(&self.legacy_metadata()?))
    }

    /// Model default attributes that correspond to real columns.
    pub fn application_default_fields(&self) -> Result<ClassificationResult> {
        let model = self.bound()?;
        Ok(application_default_names(&self.metadata()?, model))
    }

    pub fn application_default_fields_for_older_versions(&self) -> Result<ClassificationResult> {
        let model = self.bound()?;
        Ok(application_default_names(&self.legacy_metadata()?, model))
    }

    /// Union of application defaults and database defaults, application
    /// defaults first.
    pub fn default_fields(&self) -> Result<ClassificationResult> {
        let model = self.bound()?;
        Ok(default_names(&self.metadata()?, model))
    }

    pub fn default_fields_for_older_versions(&self) -> Result<ClassificationResult> {
        let model = self.bound()?;
        Ok(default_names(&self.legacy_metadata()?, model))
    }

    /// Columns whose values appear only after firing the model's
    /// creating/saving hooks on a throwaway instance.
    pub fn observer_filled_fields(&self) -> Result<ClassificationResult> {
        let model = self.bound()?;
        Ok(dedup(observer_filled_names(&self.metadata()?, model)))
    }

    pub fn observer_filled_fields_for_older_versions(&self) -> Result<ClassificationResult> {
        let model = self.bound()?;
        Ok(dedup(observer_filled_names(&self.legacy_metadata()?, model)))
    }

    fn bound(&self) -> Result<&'a dyn ModelSource> {
        self.model.ok_or(FieldsError::MissingModel)
    }

    /// Capability check happens on every call, never cached.
    fn metadata(&self) -> Result<TableMetadata> {
        let model = self.bound()?;
        if self.connection.supports_unified_schema_api() {
            schema::load_unified(self.connection, &model.table())
        } else {
            schema::load_legacy(self.connection, &model.table())
        }
    }

    fn legacy_metadata(&self) -> Result<TableMetadata> {
        let model = self.bound()?;
        schema::load_legacy(self.connection, &model.table())
    }
}

/// Deduplicate by name, preserving first-seen order.
fn dedup(names: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

fn all_names(meta: &TableMetadata) -> Vec<String> {
    dedup(meta.columns.iter().map(|c| c.name.clone()).collect())
}

fn nullable_names(meta: &TableMetadata) -> Vec<String> {
    dedup(
        meta.columns
            .iter()
            .filter(|c| c.nullable)
            .map(|c| c.name.clone())
            .collect(),
    )
}

fn database_default_names(meta: &TableMetadata) -> Vec<String> {
    dedup(
        meta.columns
            .iter()
            .filter(|c| c.default.is_some() && !c.is_primary_key)
            .map(|c| c.name.clone())
            .collect(),
    )
}

fn application_default_names(meta: &TableMetadata, model: &dyn ModelSource) -> Vec<String> {
    let columns: HashSet<&str> = meta.columns.iter().map(|c| c.name.as_str()).collect();
    dedup(
        model
            .default_attribute_names()
            .into_iter()
            .filter(|name| columns.contains(name.as_str()))
            .collect(),
    )
}

fn default_names(meta: &TableMetadata, model: &dyn ModelSource) -> Vec<String> {
    let mut names = application_default_names(meta, model);
    names.extend(database_default_names(meta));
    dedup(names)
}

fn observer_filled_names(meta: &TableMetadata, model: &dyn ModelSource) -> Vec<String> {
    let before: HashSet<String> = model.default_attribute_names().into_iter().collect();
    let columns: HashSet<&str> = meta.columns.iter().map(|c| c.name.as_str()).collect();
    model
        .pre_persist_attribute_names()
        .into_iter()
        .filter(|name| !before.contains(name))
        .filter(|name| columns.contains(name.as_str()))
        .collect()
}

fn required_names(
    meta: &TableMetadata,
    model: &dyn ModelSource,
    options: RequiredFieldOptions,
) -> Vec<String> {
    let model_defaults = model.default_attribute_names();
    let observer_filled = observer_filled_names(meta, model);

    let mut names: Vec<String> = meta
        .columns
        .iter()
        .filter(|column| {
            let rejected = (column.nullable && !options.with_nullables)
                || (column.default.is_some() && !options.with_defaults)
                || (meta.primary_key.contains(&column.name) && !options.with_primary_key)
                || (model_defaults.contains(&column.name) && !options.with_defaults)
                || (observer_filled.contains(&column.name) && !options.with_defaults);
            !rejected
        })
        .map(|column| column.name.clone())
        .collect();

    if options.with_primary_key {
        let mut with_key = meta.primary_key.clone();
        with_key.append(&mut names);
        return dedup(with_key);
    }

    dedup(names)
}
