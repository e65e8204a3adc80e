use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// Stands in for a summary the source did not provide.
///
/// Text processing downstream never sees an empty summary; a missing one is
/// always replaced by this string.
pub const SUMMARY_PLACEHOLDER: &str = "Summary not available";

/// Highest rating a book can carry.
pub const MAX_RATING: f64 = 5.0;

/// A recommendable book.
///
/// Books are created once when the catalog is loaded and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,

    #[serde(default)]
    pub author: String,

    /// Genre or shelf the book was listed under.
    #[serde(default)]
    pub category: String,

    /// Average reader rating, 0.0-5.0.
    #[serde(default)]
    pub rating: f64,

    /// Number of reader reviews.
    #[serde(default)]
    pub review_count: u64,

    /// Link back to the book's page at the source.
    #[serde(default)]
    pub source_url: String,

    /// Free-text description, compared against queries.
    #[serde(
        default = "placeholder_summary",
        deserialize_with = "deserialize_summary"
    )]
    pub summary: String,
}

fn placeholder_summary() -> String {
    SUMMARY_PLACEHOLDER.to_string()
}

fn normalize_summary(summary: &str) -> String {
    let trimmed = summary.trim();
    if trimmed.is_empty() {
        placeholder_summary()
    } else {
        trimmed.to_string()
    }
}

fn deserialize_summary<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().map_or_else(placeholder_summary, normalize_summary))
}

impl Book {
    /// Create a book with a title and summary; other fields start empty.
    ///
    /// A blank summary is replaced by [`SUMMARY_PLACEHOLDER`].
    #[must_use]
    pub fn new(title: impl Into<String>, summary: impl AsRef<str>) -> Self {
        Self {
            title: title.into(),
            author: String::new(),
            category: String::new(),
            rating: 0.0,
            review_count: 0,
            source_url: String::new(),
            summary: normalize_summary(summary.as_ref()),
        }
    }

    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    #[must_use]
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    #[must_use]
    pub fn with_review_count(mut self, review_count: u64) -> Self {
        self.review_count = review_count;
        self
    }

    #[must_use]
    pub fn with_source_url(mut self, source_url: impl Into<String>) -> Self {
        self.source_url = source_url.into();
        self
    }

    /// Whether the source supplied a real summary.
    #[must_use]
    pub fn has_summary(&self) -> bool {
        self.summary != SUMMARY_PLACEHOLDER
    }

    /// The summary cut to at most `max_chars` characters, with `...`
    /// appended when anything was cut.
    #[must_use]
    pub fn summary_preview(&self, max_chars: usize) -> String {
        match self.summary.char_indices().nth(max_chars) {
            Some((cut, _)) => format!("{}...", &self.summary[..cut]),
            None => self.summary.clone(),
        }
    }

    /// Check the record invariants: a non-blank title and summary, and a
    /// finite rating within 0-5.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidData`] naming the first violated field.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::InvalidData("book title is empty".to_string()));
        }
        if self.summary.trim().is_empty() {
            return Err(Error::InvalidData(format!(
                "book '{}' has an empty summary",
                self.title
            )));
        }
        if !self.rating.is_finite() || !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(Error::InvalidData(format!(
                "book '{}' has rating {} outside 0-{}",
                self.title, self.rating, MAX_RATING
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Author: {}", self.author)?;
        writeln!(f, "Genre: {}", self.category)?;
        writeln!(f, "Rating: {}", self.rating)?;
        writeln!(f, "Reviews: {}", self.review_count)?;
        writeln!(f, "Summary: {}", self.summary)?;
        writeln!(f, "URL: {}", self.source_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_new_keeps_summary() {
        let book = Book::new("The Martian", "  A lone astronaut survives on Mars ");
        assert_eq!(book.title, "The Martian");
        assert_eq!(book.summary, "A lone astronaut survives on Mars");
        assert!(book.has_summary());
    }

    #[test]
    fn test_book_new_blank_summary_uses_placeholder() {
        let book = Book::new("Untitled", "   ");
        assert_eq!(book.summary, SUMMARY_PLACEHOLDER);
        assert!(!book.has_summary());
    }

    #[test]
    fn test_book_builders() {
        let book = Book::new("Dune", "Spice and sandworms")
            .with_author("Frank Herbert")
            .with_category("Science Fiction")
            .with_rating(4.27)
            .with_review_count(1_234)
            .with_source_url("https://example.org/dune");

        assert_eq!(book.author, "Frank Herbert");
        assert_eq!(book.category, "Science Fiction");
        assert!((book.rating - 4.27).abs() < f64::EPSILON);
        assert_eq!(book.review_count, 1_234);
        assert_eq!(book.source_url, "https://example.org/dune");
    }

    #[test]
    fn test_summary_preview_short() {
        let book = Book::new("Short", "Tiny summary");
        assert_eq!(book.summary_preview(100), "Tiny summary");
    }

    #[test]
    fn test_summary_preview_truncates() {
        let book = Book::new("Long", "abcdefghij");
        assert_eq!(book.summary_preview(4), "abcd...");
        assert_eq!(book.summary_preview(10), "abcdefghij");
    }

    #[test]
    fn test_summary_preview_multibyte() {
        let book = Book::new("Accents", "éèêëé");
        assert_eq!(book.summary_preview(2), "éè...");
    }

    #[test]
    fn test_validate_ok() {
        let book = Book::new("Dune", "Spice").with_rating(4.5);
        assert!(book.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_rating() {
        assert!(Book::new("A", "b").with_rating(5.5).validate().is_err());
        assert!(Book::new("A", "b").with_rating(-0.1).validate().is_err());
        assert!(Book::new("A", "b").with_rating(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_title() {
        let result = Book::new("  ", "summary").validate();
        assert!(matches!(result, Err(Error::InvalidData(_))));
    }

    #[test]
    fn test_display_card() {
        let book = Book::new("Dune", "Spice")
            .with_author("Frank Herbert")
            .with_category("Science Fiction")
            .with_rating(4.25)
            .with_review_count(10)
            .with_source_url("https://example.org/dune");
        let card = book.to_string();
        assert!(card.starts_with("Title: Dune\n"));
        assert!(card.contains("Author: Frank Herbert\n"));
        assert!(card.contains("Genre: Science Fiction\n"));
        assert!(card.contains("Rating: 4.25\n"));
        assert!(card.contains("Reviews: 10\n"));
        assert!(card.ends_with("URL: https://example.org/dune\n"));
    }

    #[test]
    fn test_deserialize_missing_summary() {
        let book: Book = serde_json::from_str(r#"{"title": "Dune"}"#).unwrap();
        assert_eq!(book.summary, SUMMARY_PLACEHOLDER);
    }

    #[test]
    fn test_deserialize_null_and_blank_summary() {
        let null: Book = serde_json::from_str(r#"{"title": "A", "summary": null}"#).unwrap();
        let blank: Book = serde_json::from_str(r#"{"title": "B", "summary": "  "}"#).unwrap();
        assert_eq!(null.summary, SUMMARY_PLACEHOLDER);
        assert_eq!(blank.summary, SUMMARY_PLACEHOLDER);
    }
}
