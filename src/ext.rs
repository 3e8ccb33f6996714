//! Classification operations directly on model handles
//!
//! [`ModelFieldsExt`] is blanket-implemented for every [`ModelSource`], so
//! a bound handle exposes the classifier's operations as plain methods:
//!
//! ```no_run
//! use model_fields::drivers::SqliteConnection;
//! use model_fields::orm::TableHandle;
//! use model_fields::ModelFieldsExt;
//!
//! # fn main() -> anyhow::Result<()> {
//! let conn = SqliteConnection::open_in_memory()?;
//! let users = TableHandle::new("users");
//! let required = users.required_fields(&conn)?;
//! # Ok(())
//! # }
//! ```

use crate::classifier::{ClassificationResult, Fields, RequiredFieldOptions};
use crate::error::Result;
use crate::orm::{Connection, ModelSource};

pub trait ModelFieldsExt: ModelSource + Sized {
    fn all_fields(&self, conn: &dyn Connection) -> Result<ClassificationResult> {
        Fields::new(conn).model(self)?.all_fields()
    }

    fn required_fields(&self, conn: &dyn Connection) -> Result<ClassificationResult> {
        Fields::new(conn).model(self)?.required_fields()
    }

    fn required_fields_with(
        &self,
        conn: &dyn Connection,
        options: RequiredFieldOptions,
    ) -> Result<ClassificationResult> {
        Fields::new(conn).model(self)?.required_fields_with(options)
    }

    fn nullable_fields(&self, conn: &dyn Connection) -> Result<ClassificationResult> {
        Fields::new(conn).model(self)?.nullable_fields()
    }

    fn primary_field(&self, conn: &dyn Connection) -> Result<ClassificationResult> {
        Fields::new(conn).model(self)?.primary_field()
    }

    fn database_default_fields(&self, conn: &dyn Connection) -> Result<ClassificationResult> {
        Fields::new(conn).model(self)?.database_default_fields()
    }

    fn application_default_fields(&self, conn: &dyn Connection) -> Result<ClassificationResult> {
        Fields::new(conn).model(self)?.application_default_fields()
    }

    fn default_fields(&self, conn: &dyn Connection) -> Result<ClassificationResult> {
        Fields::new(conn).model(self)?.default_fields()
    }

    fn observer_filled_fields(&self, conn: &dyn Connection) -> Result<ClassificationResult> {
        Fields::new(conn).model(self)?.observer_filled_fields()
    }
}

impl<T: ModelSource> ModelFieldsExt for T {}
