//! Word tokenization shared by the vector space and its tests.

use regex::Regex;
use std::sync::LazyLock;

#[allow(clippy::expect_used)] // literal pattern
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+\b").expect("word pattern is valid"));

/// Split text into lowercase word tokens.
///
/// A token is any maximal run of Unicode word characters, so single letters
/// and digits count and punctuation never does.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}
