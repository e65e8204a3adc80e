//! Vector search for folio.
//!
//! Turns book summaries and a free-text query into TF-IDF vectors over a
//! shared vocabulary, scores each book by cosine similarity against the
//! query, and returns the best matches.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod rank;
pub mod recommend;
pub mod tokenize;
pub mod vectorize;

pub use error::{SearchError, SearchResult};
pub use rank::{cosine_similarity, rank, Scored, DEFAULT_LIMIT};
pub use recommend::{Recommendation, Recommender};
pub use tokenize::tokenize;
pub use vectorize::{VectorSpace, Vocabulary};
