//! Error types shared by the core modules.

use thiserror::Error;

use super::links::Purpose;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("locale catalog is empty")]
    Empty,

    #[error("locale catalog does not contain the fallback locale `{0}`")]
    MissingFallback(&'static str),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("locale data is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("invalid {field} format description: {reason}")]
    InvalidDescription { field: &'static str, reason: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    #[error("no {purpose} URL configured for locale `{locale}` or the fallback locale")]
    MissingUrl { purpose: Purpose, locale: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OpenError {
    #[error("platform refused to open `{url}`: {reason}")]
    Rejected { url: String, reason: String },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored exposure is malformed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(&'static str),
}
