//! Search error types.

use thiserror::Error;

/// Errors raised by the vector space model.
#[derive(Debug, Error)]
pub enum SearchError {
    /// A vector space was requested over zero corpus documents.
    #[error("cannot build a vector space over an empty corpus")]
    EmptyCorpus,
}

/// Convenience alias for search results.
pub type SearchResult<T> = std::result::Result<T, SearchError>;
