use anyhow::Result;

use folio_etl::Config;

pub fn show_status(config: &Config) -> Result<()> {
    let catalog = super::open_catalog(config)?;
    let stats = catalog.stats();

    println!("\nFolio Status\n");
    println!("  Catalog: {}", config.catalog_path.display());
    println!("  Books: {}", stats.total);
    println!("  Missing summaries: {}", stats.missing_summaries);
    match stats.mean_rating {
        Some(mean) => println!("  Mean rating: {:.2}", mean),
        None => println!("\n  The catalog is empty; recommendations will always be empty"),
    }

    Ok(())
}
