//! Error types for the catalog crate.
//!
//! Filtering itself never fails; these errors only come from turning
//! outside input (flag values, catalog files) into products.

use thiserror::Error;

/// Errors that can occur while parsing or loading catalog data
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error occurred while reading a catalog file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog file was not valid JSON or did not match the product schema
    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A field had a value outside its enumeration
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Catalog data parsed but failed validation
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
