//! The in-memory book catalog.
//!
//! A [`Catalog`] is filled once by whatever acquires the books and read
//! many times after that. The books live in a shared immutable slice, so
//! clones are cheap and every reader sees the same ordering for as long as
//! it holds its clone.

use std::sync::Arc;

use crate::model::Book;

/// An ordered, immutable snapshot of books.
#[derive(Debug, Clone)]
pub struct Catalog {
    books: Arc<[Book]>,
}

/// Summary figures for a catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogStats {
    pub total: usize,

    /// Books whose summary is the placeholder.
    pub missing_summaries: usize,

    /// Mean rating, `None` for an empty catalog.
    pub mean_rating: Option<f64>,
}

impl Catalog {
    #[must_use]
    pub fn new(books: Vec<Book>) -> Self {
        log::debug!("Catalog created with {} books", books.len());
        Self {
            books: books.into(),
        }
    }

    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Book> {
        self.books.iter()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Book> {
        self.books.get(index)
    }

    #[must_use]
    pub fn stats(&self) -> CatalogStats {
        let total = self.books.len();
        let missing_summaries = self.books.iter().filter(|b| !b.has_summary()).count();
        let mean_rating = if total == 0 {
            None
        } else {
            Some(self.books.iter().map(|b| b.rating).sum::<f64>() / total as f64)
        };
        CatalogStats {
            total,
            missing_summaries,
            mean_rating,
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl From<Vec<Book>> for Catalog {
    fn from(books: Vec<Book>) -> Self {
        Self::new(books)
    }
}

impl FromIterator<Book> for Catalog {
    fn from_iter<I: IntoIterator<Item = Book>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
