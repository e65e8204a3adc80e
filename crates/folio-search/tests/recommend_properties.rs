//! Property tests for ranking and recommendation invariants.

use std::collections::HashSet;

use folio_core::{Book, Catalog};
use folio_search::{rank, Recommender, DEFAULT_LIMIT};
use proptest::prelude::*;

fn catalog_from(summaries: &[String]) -> Catalog {
    summaries
        .iter()
        .enumerate()
        .map(|(i, summary)| Book::new(format!("Book {i}"), summary))
        .collect()
}

fn summaries() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-f]{1,3}( [a-f]{1,3}){0,6}", 1..12)
}

proptest! {
    #[test]
    fn recommend_returns_at_most_five_distinct_catalog_books(
        summaries in summaries(),
        query in "[a-f ]{0,20}",
    ) {
        let catalog = catalog_from(&summaries);
        let books = Recommender::new(catalog.clone()).recommend(&query);

        prop_assert!(books.len() <= DEFAULT_LIMIT);
        prop_assert_eq!(books.len(), catalog.len().min(DEFAULT_LIMIT));

        let mut seen = HashSet::new();
        for book in &books {
            prop_assert!(catalog.books().contains(book));
            prop_assert!(seen.insert(book.title.clone()), "duplicate {}", book.title);
        }
    }

    #[test]
    fn empty_catalog_never_recommends(query in ".{0,30}") {
        prop_assert!(Recommender::new(Catalog::default()).recommend(&query).is_empty());
    }

    #[test]
    fn summary_as_query_scores_highest(summaries in summaries(), pick in any::<prop::sample::Index>()) {
        let target = pick.index(summaries.len());
        let catalog = catalog_from(&summaries);
        let scored = Recommender::new(catalog)
            .with_limit(summaries.len())
            .recommend_scored(&summaries[target]);

        let target_title = format!("Book {target}");
        let target_score = scored
            .iter()
            .find(|r| r.book.title == target_title)
            .map(|r| r.score)
            .unwrap();
        for rec in &scored {
            prop_assert!(target_score >= rec.score - 1e-9);
        }
    }

    #[test]
    fn scores_are_descending(summaries in summaries(), query in "[a-f ]{0,20}") {
        let scored = Recommender::new(catalog_from(&summaries))
            .with_limit(summaries.len())
            .recommend_scored(&query);
        for pair in scored.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn rank_is_scale_invariant(
        vectors in prop::collection::vec(prop::collection::vec(-10.0f64..10.0, 4), 1..10),
        query in prop::collection::vec(-10.0f64..10.0, 4),
        factor in 0.01f64..100.0,
    ) {
        let items: Vec<usize> = (0..vectors.len()).collect();
        let scaled: Vec<Vec<f64>> = vectors
            .iter()
            .map(|v| v.iter().map(|x| x * factor).collect())
            .collect();
        let scaled_query: Vec<f64> = query.iter().map(|x| x * factor).collect();

        let plain = rank(&query, &vectors, &items, DEFAULT_LIMIT);
        let rescaled = rank(&scaled_query, &scaled, &items, DEFAULT_LIMIT);

        prop_assert_eq!(plain.len(), rescaled.len());
        for (a, b) in plain.iter().zip(&rescaled) {
            prop_assert!((a.score - b.score).abs() < 1e-9);
        }
    }
}
