//! Catalog and loader errors.

use thiserror::Error;

/// Errors raised while building a [`Catalog`](crate::catalog::Catalog).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate ingredient id: {0}")]
    DuplicateId(String),
}

/// Errors raised while parsing ingredient or customer records.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("line {line}: unknown tag '{name}'")]
    UnknownTag { line: usize, name: String },

    #[error("line {line}: unknown category '{name}'")]
    UnknownCategory { line: usize, name: String },

    #[error("line {line}: unknown size '{name}'")]
    UnknownSize { line: usize, name: String },

    #[error("line {line}: ingredient '{id}' has no category")]
    MissingCategory { line: usize, id: String },

    #[error("invalid JSON records: {0}")]
    Json(#[from] serde_json::Error),
}
