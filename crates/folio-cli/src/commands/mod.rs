pub mod config;
pub mod recommend;
pub mod shell;
pub mod status;

pub use recommend::run_recommend;
pub use shell::run_shell;
pub use status::show_status;

use anyhow::{Context, Result};
use folio_core::Catalog;
use folio_etl::{CatalogLoader, Config};

/// Load the configured catalog file.
pub fn open_catalog(config: &Config) -> Result<Catalog> {
    let loaded = CatalogLoader::new(config.base_url.clone())
        .load(&config.catalog_path)
        .with_context(|| {
            format!(
                "Failed to load catalog {}\n\nSet one with --catalog or FOLIO_CATALOG_PATH.",
                config.catalog_path.display()
            )
        })?;

    if loaded.report.skipped > 0 {
        log::warn!(
            "{} catalog records were skipped as invalid",
            loaded.report.skipped
        );
    }
    Ok(loaded.into_catalog())
}
