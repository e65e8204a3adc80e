//! Catalog file loading.
//!
//! A catalog file lists book records as JSON (a bare array, or an object
//! with a `books` array) or TOML (`[[books]]` tables). Records are lenient
//! on the way in: numeric fields may still be in the display form a listing
//! page shows (`"4.12 avg rating"`, `"1,234 reviews"`), author and genre may
//! be missing, and links may be relative to the source site. Each record is
//! normalized into a [`Book`] that satisfies the model invariants; records
//! that cannot be are skipped and counted in the [`LoadReport`].

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use folio_core::{Book, Catalog};

use crate::error::{LoadError, LoadResult};

/// Site that relative book links are resolved against by default.
pub const DEFAULT_BASE_URL: &str = "https://www.goodreads.com";

/// Author and genre used when a record leaves them out.
const UNKNOWN: &str = "Unknown";

#[allow(clippy::expect_used)] // literal pattern
static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d[\d,]*(?:\.\d+)?").expect("number pattern is valid"));

// ---------------------------------------------------------------------------
// Raw record types
// ---------------------------------------------------------------------------

/// A number as it appears in a catalog file: either a real number or the
/// text a listing page displays around it.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Numeric {
    Number(f64),
    Text(String),
}

impl Numeric {
    fn value(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(text) => parse_display_number(text),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct RawBook {
    title: Option<String>,
    author: Option<String>,
    #[serde(alias = "genre")]
    category: Option<String>,
    rating: Option<Numeric>,
    #[serde(alias = "reviews")]
    review_count: Option<Numeric>,
    #[serde(alias = "url")]
    source_url: Option<String>,
    summary: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    List(Vec<RawBook>),
    Wrapped { books: Vec<RawBook> },
}

impl CatalogFile {
    fn into_records(self) -> Vec<RawBook> {
        match self {
            Self::List(books) | Self::Wrapped { books } => books,
        }
    }
}

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Counts from one catalog load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
}

/// The books read from a catalog file, in file order.
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub books: Vec<Book>,
    pub report: LoadReport,
}

impl LoadedCatalog {
    pub fn into_catalog(self) -> Catalog {
        Catalog::new(self.books)
    }
}

/// Reads catalog files and normalizes their records.
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    base_url: String,
}

impl Default for CatalogLoader {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl CatalogLoader {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Load a catalog file, choosing the format from its extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, has an unsupported
    /// extension, or does not parse. Invalid individual records are skipped,
    /// not reported as errors.
    pub fn load(&self, path: &Path) -> LoadResult<LoadedCatalog> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        let parse: fn(&Self, &str) -> LoadResult<LoadedCatalog> = match extension.as_str() {
            "json" => Self::parse_json,
            "toml" => Self::parse_toml,
            "" => return Err(LoadError::UnsupportedFormat(path.display().to_string())),
            other => return Err(LoadError::UnsupportedFormat(other.to_string())),
        };

        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        log::info!("Loading catalog from {}", path.display());
        parse(self, &content)
    }

    /// Parse a JSON catalog document.
    pub fn parse_json(&self, content: &str) -> LoadResult<LoadedCatalog> {
        let file: CatalogFile = serde_json::from_str(content).map_err(|e| LoadError::Parse {
            format: "JSON",
            message: e.to_string(),
        })?;
        self.normalize_all(file.into_records())
    }

    /// Parse a TOML catalog document.
    pub fn parse_toml(&self, content: &str) -> LoadResult<LoadedCatalog> {
        #[derive(Deserialize)]
        struct TomlCatalog {
            #[serde(default)]
            books: Vec<RawBook>,
        }

        let file: TomlCatalog = toml::from_str(content).map_err(|e| LoadError::Parse {
            format: "TOML",
            message: e.to_string(),
        })?;
        self.normalize_all(file.books)
    }

    fn normalize_all(&self, records: Vec<RawBook>) -> LoadResult<LoadedCatalog> {
        let mut books = Vec::with_capacity(records.len());
        let mut report = LoadReport::default();

        for (index, raw) in records.into_iter().enumerate() {
            match self.normalize(index, raw) {
                Ok(book) => {
                    books.push(book);
                    report.loaded += 1;
                }
                Err(e) if e.is_skippable() => {
                    log::warn!("Skipping catalog record: {}", e);
                    report.skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        log::info!(
            "Catalog loaded: {} books, {} skipped",
            report.loaded,
            report.skipped
        );
        Ok(LoadedCatalog { books, report })
    }

    fn normalize(&self, index: usize, raw: RawBook) -> LoadResult<Book> {
        let invalid = |reason: String| LoadError::Invalid { index, reason };

        let title = raw
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| invalid("missing title".to_string()))?;

        let rating = match &raw.rating {
            Some(value) => value
                .value()
                .ok_or_else(|| invalid(format!("unreadable rating {:?}", value)))?,
            None => 0.0,
        };

        let review_count = match &raw.review_count {
            Some(value) => value
                .value()
                .and_then(to_count)
                .ok_or_else(|| invalid(format!("unreadable review count {:?}", value)))?,
            None => 0,
        };

        let book = Book::new(title, raw.summary.unwrap_or_default())
            .with_author(non_blank_or_unknown(raw.author.as_deref()))
            .with_category(non_blank_or_unknown(raw.category.as_deref()))
            .with_rating(rating)
            .with_review_count(review_count)
            .with_source_url(self.resolve_url(raw.source_url.as_deref().unwrap_or_default()));

        book.validate().map_err(|e| invalid(e.to_string()))?;
        Ok(book)
    }

    /// Make a book link absolute against the base URL.
    pub fn resolve_url(&self, url: &str) -> String {
        let url = url.trim();
        if url.is_empty() || url.starts_with("http://") || url.starts_with("https://") {
            return url.to_string();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            url.trim_start_matches('/')
        )
    }
}

/// Load a catalog file with the default loader.
///
/// # Errors
///
/// See [`CatalogLoader::load`].
pub fn load_catalog(path: &Path) -> LoadResult<Catalog> {
    CatalogLoader::default()
        .load(path)
        .map(LoadedCatalog::into_catalog)
}

/// First number in display text, ignoring thousands separators.
fn parse_display_number(text: &str) -> Option<f64> {
    NUMBER
        .find(text)
        .and_then(|m| m.as_str().replace(',', "").parse().ok())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_count(value: f64) -> Option<u64> {
    (value.is_finite() && value >= 0.0 && value.fract() == 0.0).then_some(value as u64)
}

fn non_blank_or_unknown(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(UNKNOWN)
        .to_string()
}
