//! Catalog loading error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a catalog file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The catalog file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The catalog file is not valid JSON or TOML for the catalog layout.
    #[error("failed to parse {format} catalog: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    /// The file extension does not name a supported catalog format.
    #[error("unsupported catalog format: {0}")]
    UnsupportedFormat(String),

    /// One record in the catalog could not be turned into a book.
    #[error("record {index} is invalid: {reason}")]
    Invalid { index: usize, reason: String },
}

impl LoadError {
    /// Returns `true` when the error concerns a single record, which can be
    /// skipped without abandoning the rest of the catalog.
    pub fn is_skippable(&self) -> bool {
        matches!(self, Self::Invalid { .. })
    }
}

/// Convenience alias for loading results.
pub type LoadResult<T> = std::result::Result<T, LoadError>;
