//! Corpus construction.

use crate::catalog::Catalog;

/// Collect each book's summary, in catalog order.
///
/// The result is aligned 1:1 with [`Catalog::books`]: nothing is filtered or
/// deduplicated. An empty catalog yields an empty corpus.
pub fn build_corpus(catalog: &Catalog) -> Vec<&str> {
    catalog.iter().map(|book| book.summary.as_str()).collect()
}
