//! Cosine similarity and ranked selection.

/// Most recommendations returned for one query unless configured otherwise.
pub const DEFAULT_LIMIT: usize = 5;

/// An item paired with its similarity to the query.
#[derive(Debug, Clone, PartialEq)]
pub struct Scored<T> {
    pub item: T,
    pub score: f64,
}

/// Cosine similarity between two vectors.
///
/// Returns `0.0` if either vector has zero magnitude or the vectors differ
/// in length.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0;
    let mut mag_a = 0.0;
    let mut mag_b = 0.0;

    for (x, y) in a.iter().zip(b) {
        dot += x * y;
        mag_a += x * x;
        mag_b += y * y;
    }

    let denom = mag_a.sqrt() * mag_b.sqrt();
    if denom == 0.0 {
        return 0.0;
    }

    dot / denom
}

/// Score every item against `query` and keep the best `limit`.
///
/// `corpus[i]` is the vector for `items[i]`. Items are ordered by descending
/// score; equal scores keep their original relative order. Empty input gives
/// an empty result.
pub fn rank<'a, T, V>(query: &[f64], corpus: &[V], items: &'a [T], limit: usize) -> Vec<Scored<&'a T>>
where
    V: AsRef<[f64]>,
{
    if corpus.len() != items.len() {
        log::warn!(
            "Ranking {} vectors against {} items; extra entries are ignored",
            corpus.len(),
            items.len()
        );
    }

    let mut scored: Vec<Scored<&T>> = items
        .iter()
        .zip(corpus)
        .map(|(item, vector)| Scored {
            item,
            score: cosine_similarity(query, vector.as_ref()),
        })
        .collect();

    // sort_by is stable, which is the tie-break
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(limit);
    scored
}
