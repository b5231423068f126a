//! Error types for the principles crate.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrincipleError {
    /// Journal index does not refer to an entry
    #[error("Entry index {index} out of range (journal has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Refused to replace an existing file without `overwrite`
    #[error("File already exists: {}", .path.display())]
    AlreadyExists { path: PathBuf },

    /// A saved journal line didn't have the `N: text` shape
    #[error("Malformed journal entry at line {line}: {content}")]
    MalformedEntry { line: usize, content: String },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, PrincipleError>;
