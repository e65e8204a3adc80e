pub mod book;

pub use book::{Book, MAX_RATING, SUMMARY_PLACEHOLDER};
