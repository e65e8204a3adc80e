//! Book recommendations for free-text queries.
//!
//! # Usage
//!
//! ```
//! use folio_core::{Book, Catalog};
//! use folio_search::Recommender;
//!
//! let catalog = Catalog::new(vec![
//!     Book::new("The Martian", "A lone astronaut survives on Mars"),
//!     Book::new("The Hobbit", "A wizard battles a dragon"),
//! ]);
//! let recommender = Recommender::new(catalog);
//!
//! let books = recommender.recommend("astronaut survives space");
//! assert_eq!(books[0].title, "The Martian");
//! ```

use folio_core::{build_corpus, Book, Catalog};

use crate::rank::{rank, DEFAULT_LIMIT};
use crate::vectorize::VectorSpace;

/// A recommended book and its cosine similarity to the query.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub book: Book,
    pub score: f64,
}

/// Recommends books from a catalog by summary similarity.
///
/// Each call builds a new [`VectorSpace`] from the catalog summaries plus
/// the query. The query's own terms are part of the vocabulary and the
/// document frequencies, so the space cannot be cached between queries
/// without changing the scores.
///
/// When the query shares no terms with any summary, every book scores zero
/// and the first books of the catalog are returned in catalog order.
#[derive(Debug, Clone)]
pub struct Recommender {
    catalog: Catalog,
    limit: usize,
}

impl Recommender {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Set the maximum number of recommendations per query (at least 1).
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.max(1);
        self
    }

    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Best-matching books for `query`, best first.
    pub fn recommend(&self, query: &str) -> Vec<Book> {
        self.recommend_scored(query)
            .into_iter()
            .map(|rec| rec.book)
            .collect()
    }

    /// Best-matching books for `query` with their scores, best first.
    pub fn recommend_scored(&self, query: &str) -> Vec<Recommendation> {
        let corpus = build_corpus(&self.catalog);
        if corpus.is_empty() {
            log::debug!("Catalog is empty; no recommendations for {:?}", query);
            return Vec::new();
        }

        let space = match VectorSpace::build(&corpus, query) {
            Ok(space) => space,
            Err(e) => {
                log::warn!("Could not vectorize query {:?}: {}", query, e);
                return Vec::new();
            }
        };

        let ranked = rank(
            space.query_vector(),
            space.corpus_vectors(),
            self.catalog.books(),
            self.limit,
        );
        log::info!(
            "Ranked {} books for {:?}, returning {}",
            self.catalog.len(),
            query,
            ranked.len()
        );

        ranked
            .into_iter()
            .map(|scored| Recommendation {
                book: scored.item.clone(),
                score: scored.score,
            })
            .collect()
    }
}
