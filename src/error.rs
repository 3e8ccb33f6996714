//! Error types for model-fields

use thiserror::Error;

/// Errors that can occur during field classification
#[derive(Error, Debug)]
pub enum FieldsError {
    #[error("model must be a persistable model type")]
    InvalidModel,

    #[error("you should bind a model before classifying fields")]
    MissingModel,

    #[error("unsupported database driver: {driver}")]
    UnsupportedDriver { driver: String },

    /// Query or connection failure, passed through from the host's
    /// connection layer without retrying or rewording.
    #[error(transparent)]
    Query(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, FieldsError>;
