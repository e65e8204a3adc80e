use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use folio_etl::Config;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "folio", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the catalog file (default: ~/.local/share/folio/catalog.json)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Recommend books for a free-text query
    ///
    /// Compares the query against every book summary in the catalog using
    /// TF-IDF weighted term vectors and cosine similarity, then prints the
    /// best matches, best first.
    ///
    /// A query that shares no words with any summary still lists books:
    /// every score is zero and the catalog order decides.
    Recommend {
        /// The query text (multiple words are joined with spaces)
        #[arg(required = true)]
        query: Vec<String>,

        /// Show the similarity score next to each book
        #[arg(long)]
        scores: bool,

        /// Print full summaries instead of previews
        #[arg(long)]
        full: bool,

        /// Override the maximum number of recommendations
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Ask for queries interactively until 'exit'
    Shell,
    /// Show catalog statistics
    Status,
    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Debug, clap::Subcommand)]
enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Print one setting, or the whole config file when no key is given
    Get { key: Option<String> },
    /// Print the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file with defaults if it does not exist
    Init,
}

fn init_logging(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.catalog {
        Some(path) => Config::load_with_catalog_path(path)?,
        None => Config::load()?,
    };
    init_logging(&config.log_level);

    match cli.command {
        Commands::Recommend {
            query,
            scores,
            full,
            limit,
        } => {
            let options = commands::recommend::DisplayOptions { scores, full };
            commands::run_recommend(&config, &query.join(" "), limit, options)?;
        }
        Commands::Shell => {
            commands::run_shell(&config)?;
        }
        Commands::Status => {
            commands::show_status(&config)?;
        }
        Commands::Config(command) => match command {
            ConfigCommand::Show => commands::config::show_config(&config)?,
            ConfigCommand::Get { key } => commands::config::get_config(&config, key)?,
            ConfigCommand::Path => commands::config::show_path()?,
            ConfigCommand::Example => commands::config::show_example()?,
            ConfigCommand::Init => commands::config::init_config()?,
        },
    }

    Ok(())
}
