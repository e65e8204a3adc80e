use anyhow::Result;
use std::io::{BufRead, Write};

use folio_etl::Config;
use folio_search::Recommender;

use super::recommend::{build_recommender, print_recommendations, DisplayOptions};

const PROMPT: &str = "Enter a genre you like (or 'exit' to quit): ";

/// Prompt for queries on stdin until 'exit' or end of input.
pub fn run_shell(config: &Config) -> Result<()> {
    let recommender = build_recommender(config, None)?;
    log::info!(
        "Shell ready with {} books in the catalog",
        recommender.catalog().len()
    );

    let stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    run_loop(&recommender, stdin, &mut stdout)
}

/// Read queries line by line and print recommendations for each.
pub fn run_loop<R: BufRead, W: Write>(recommender: &Recommender, input: R, out: &mut W) -> Result<()> {
    let mut lines = input.lines();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let query = line?;
        if query.trim().eq_ignore_ascii_case("exit") {
            break;
        }

        let recommendations = recommender.recommend_scored(&query);
        print_recommendations(out, &recommendations, DisplayOptions::default())?;
    }
    Ok(())
}
