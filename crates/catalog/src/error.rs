//! Error types for the catalog crate.
//!
//! Rust error handling concepts demonstrated:
//! - thiserror for defining custom error types
//! - `#[from]` conversions so `?` works on I/O and JSON errors
//! - Error messages with context (file and line number)

use thiserror::Error;

/// Errors that can occur while building or loading a product catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error occurred while reading a catalog file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A JSON catalog could not be decoded
    #[error("Invalid JSON catalog: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Line in a catalog file couldn't be parsed
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// A field had a value outside its enum (e.g. color "purple")
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Expected number of fields in a line doesn't match actual
    #[error("Expected {expected} fields but found {found} in line {line}")]
    FieldCountMismatch {
        expected: usize,
        found: usize,
        line: usize,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
