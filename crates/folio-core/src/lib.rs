//! Core domain model for folio.
//!
//! This crate defines the [`Book`] record, the in-memory [`Catalog`] that
//! holds an immutable snapshot of books, and the corpus builder that turns
//! a catalog into the ordered summary texts the search layer vectorizes.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod catalog;
pub mod corpus;
pub mod error;
pub mod model;

pub use catalog::{Catalog, CatalogStats};
pub use corpus::build_corpus;
pub use error::{Error, Result};
pub use model::{Book, MAX_RATING, SUMMARY_PLACEHOLDER};
