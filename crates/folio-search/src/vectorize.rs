//! TF-IDF vector space over a corpus plus one query.
//!
//! Every document is tokenized with [`tokenize`], the vocabulary is the
//! union of all tokens in lexicographic order, and each document becomes a
//! dense vector with one coordinate per vocabulary term:
//!
//! ```text
//! tf(t, d)  = occurrences of t in d
//! idf(t)    = ln((1 + n) / (1 + df(t))) + 1
//! w(t, d)   = tf(t, d) * idf(t), then L2-normalized per document
//! ```
//!
//! where `n` counts the corpus documents *and* the query. The query takes
//! part in the vocabulary and document frequencies, so a space is only
//! meaningful for the query it was built with and must not be reused for
//! another one.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{SearchError, SearchResult};
use crate::tokenize::tokenize;

/// Sorted term list with index lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    index: BTreeMap<String, usize>,
}

impl Vocabulary {
    fn from_documents(documents: &[Vec<String>]) -> Self {
        let terms: BTreeSet<&str> = documents
            .iter()
            .flat_map(|tokens| tokens.iter().map(String::as_str))
            .collect();
        let index = terms
            .into_iter()
            .enumerate()
            .map(|(i, term)| (term.to_string(), i))
            .collect();
        Self { index }
    }

    /// Column of `term`, if the term occurs anywhere in the space.
    #[must_use]
    pub fn position(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Terms in column order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }
}

/// TF-IDF vectors for a corpus and the query it was built with.
#[derive(Debug, Clone)]
pub struct VectorSpace {
    vocabulary: Vocabulary,
    idf: Vec<f64>,
    corpus: Vec<Vec<f64>>,
    query: Vec<f64>,
}

impl VectorSpace {
    /// Vectorize `corpus` and `query` jointly.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyCorpus`] when `corpus` has no documents.
    pub fn build<S: AsRef<str>>(corpus: &[S], query: &str) -> SearchResult<Self> {
        if corpus.is_empty() {
            return Err(SearchError::EmptyCorpus);
        }

        let documents: Vec<Vec<String>> = corpus
            .iter()
            .map(|text| tokenize(text.as_ref()))
            .chain(std::iter::once(tokenize(query)))
            .collect();

        let vocabulary = Vocabulary::from_documents(&documents);
        let dims = vocabulary.len();
        let n_docs = documents.len() as f64;

        let mut doc_freq = vec![0usize; dims];
        let mut rows: Vec<Vec<f64>> = Vec::with_capacity(documents.len());
        for tokens in &documents {
            let mut row = vec![0.0; dims];
            for token in tokens {
                if let Some(col) = vocabulary.position(token) {
                    row[col] += 1.0;
                }
            }
            for (col, &count) in row.iter().enumerate() {
                if count > 0.0 {
                    doc_freq[col] += 1;
                }
            }
            rows.push(row);
        }

        let idf: Vec<f64> = doc_freq
            .iter()
            .map(|&df| ((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        for row in &mut rows {
            for (weight, factor) in row.iter_mut().zip(&idf) {
                *weight *= factor;
            }
            l2_normalize(row);
        }

        let query = rows.pop().unwrap_or_default();
        log::debug!(
            "Built vector space: {} documents, {} terms",
            rows.len() + 1,
            dims
        );

        Ok(Self {
            vocabulary,
            idf,
            corpus: rows,
            query,
        })
    }

    /// One vector per corpus document, in corpus order.
    #[must_use]
    pub fn corpus_vectors(&self) -> &[Vec<f64>] {
        &self.corpus
    }

    #[must_use]
    pub fn query_vector(&self) -> &[f64] {
        &self.query
    }

    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    #[must_use]
    pub fn dimensions(&self) -> usize {
        self.vocabulary.len()
    }

    /// Inverse document frequency of `term`, `None` when it is not in the
    /// vocabulary.
    #[must_use]
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.position(term).map(|col| self.idf[col])
    }
}

fn l2_normalize(vector: &mut [f64]) {
    let norm = vector.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > 0.0 {
        for x in vector.iter_mut() {
            *x /= norm;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(v: &[f64]) -> f64 {
        v.iter().map(|x| x * x).sum::<f64>().sqrt()
    }

    #[test]
    fn test_empty_corpus_rejected() {
        let corpus: Vec<&str> = Vec::new();
        let result = VectorSpace::build(&corpus, "fantasy");
        assert!(matches!(result, Err(SearchError::EmptyCorpus)));
    }

    #[test]
    fn test_shapes_match() {
        let space = VectorSpace::build(&["red fish", "blue fish", "one two"], "red").unwrap();
        assert_eq!(space.corpus_vectors().len(), 3);
        assert_eq!(space.dimensions(), 5);
        for row in space.corpus_vectors() {
            assert_eq!(row.len(), space.dimensions());
        }
        assert_eq!(space.query_vector().len(), space.dimensions());
    }

    #[test]
    fn test_vocabulary_is_sorted_union_including_query() {
        let space = VectorSpace::build(&["b a", "c"], "z").unwrap();
        let terms: Vec<&str> = space.vocabulary().terms().collect();
        assert_eq!(terms, vec!["a", "b", "c", "z"]);
        assert_eq!(space.vocabulary().position("z"), Some(3));
        assert_eq!(space.vocabulary().position("q"), None);
    }

    #[test]
    fn test_smoothed_idf() {
        // n = 3 documents: "fish" in 2, "red" in 1, "cat" in 1 (the query)
        let space = VectorSpace::build(&["red fish", "fish"], "cat").unwrap();
        let expected_fish = (4.0_f64 / 3.0).ln() + 1.0;
        let expected_red = (4.0_f64 / 2.0).ln() + 1.0;
        assert!((space.idf("fish").unwrap() - expected_fish).abs() < 1e-12);
        assert!((space.idf("red").unwrap() - expected_red).abs() < 1e-12);
        assert!((space.idf("cat").unwrap() - expected_red).abs() < 1e-12);
        assert!(space.idf("dog").is_none());
    }

    #[test]
    fn test_rows_are_unit_length() {
        let space = VectorSpace::build(&["red fish red", "blue fish"], "fish").unwrap();
        for row in space.corpus_vectors() {
            assert!((norm(row) - 1.0).abs() < 1e-12);
        }
        assert!((norm(space.query_vector()) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_term_frequency_counts_repeats() {
        let space = VectorSpace::build(&["red red fish"], "blue").unwrap();
        let row = &space.corpus_vectors()[0];
        let red = space.vocabulary().position("red").unwrap();
        let fish = space.vocabulary().position("fish").unwrap();
        // same idf (both appear in one of two documents), so tf decides
        assert!((row[red] - 2.0 * row[fish]).abs() < 1e-12);
    }

    #[test]
    fn test_query_terms_outside_corpus_extend_vocabulary() {
        let space = VectorSpace::build(&["red fish"], "space").unwrap();
        let col = space.vocabulary().position("space").unwrap();
        assert!(space.corpus_vectors()[0][col].abs() < f64::EPSILON);
        assert!(space.query_vector()[col] > 0.0);
    }

    #[test]
    fn test_no_tokens_anywhere_gives_zero_vectors() {
        let space = VectorSpace::build(&["...", "!!"], "").unwrap();
        assert_eq!(space.dimensions(), 0);
        assert!(space.query_vector().is_empty());
        assert!(space.corpus_vectors().iter().all(|row| row.is_empty()));
    }

    #[test]
    fn test_empty_query_gives_zero_query_vector() {
        let space = VectorSpace::build(&["red fish", "blue fish"], "").unwrap();
        assert!(space.query_vector().iter().all(|w| w.abs() < f64::EPSILON));
    }
}
