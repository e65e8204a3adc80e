use anyhow::Result;
use std::io::Write;

use folio_etl::Config;
use folio_search::{Recommendation, Recommender};

/// Summary characters shown before the preview is cut.
pub const PREVIEW_CHARS: usize = 100;

/// How recommendations are printed.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayOptions {
    /// Print the similarity score with each book.
    pub scores: bool,
    /// Print the whole summary instead of a preview.
    pub full: bool,
}

/// Build a recommender over the configured catalog.
pub fn build_recommender(config: &Config, limit: Option<usize>) -> Result<Recommender> {
    let catalog = super::open_catalog(config)?;
    Ok(Recommender::new(catalog).with_limit(limit.unwrap_or(config.max_results)))
}

pub fn run_recommend(
    config: &Config,
    query: &str,
    limit: Option<usize>,
    options: DisplayOptions,
) -> Result<()> {
    let recommender = build_recommender(config, limit)?;
    let recommendations = recommender.recommend_scored(query);

    let mut out = std::io::stdout().lock();
    print_recommendations(&mut out, &recommendations, options)?;
    Ok(())
}

/// Write a numbered list of recommendation cards.
pub fn print_recommendations<W: Write>(
    out: &mut W,
    recommendations: &[Recommendation],
    options: DisplayOptions,
) -> std::io::Result<()> {
    writeln!(out, "Personalized Book Recommendations:")?;
    if recommendations.is_empty() {
        writeln!(out, "No book recommendations found.")?;
        return Ok(());
    }

    for (i, rec) in recommendations.iter().enumerate() {
        if options.scores {
            writeln!(out, "{}. (score {:.4})", i + 1, rec.score)?;
        } else {
            writeln!(out, "{}.", i + 1)?;
        }

        let book = &rec.book;
        if options.full {
            writeln!(out, "{}", book)?;
        } else {
            writeln!(out, "Title: {}", book.title)?;
            writeln!(out, "Author: {}", book.author)?;
            writeln!(out, "Genre: {}", book.category)?;
            writeln!(out, "Rating: {}", book.rating)?;
            writeln!(out, "Reviews: {}", book.review_count)?;
            writeln!(out, "Summary: {}", book.summary_preview(PREVIEW_CHARS))?;
            writeln!(out, "URL: {}\n", book.source_url)?;
        }
    }
    Ok(())
}
