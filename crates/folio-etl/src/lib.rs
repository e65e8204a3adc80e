//! Catalog acquisition and configuration for folio.
//!
//! Reads book records from JSON or TOML catalog files, normalizes them into
//! valid [`folio_core::Book`] values, and loads the layered application
//! configuration.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod error;
pub mod load;

pub use config::Config;
pub use error::{LoadError, LoadResult};
pub use load::{load_catalog, CatalogLoader, LoadReport, LoadedCatalog};
