//! tagdex - Bidirectional tag index
//!
//! An in-memory index associating values with tags, answering set-algebra
//! lookups (intersection, union, exact match, difference, complement,
//! symmetric difference) and boolean tag queries. A small CLI builds the
//! index from a TOML manifest.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

#[cfg(test)]
mod test_support;

pub use domain::{TagQuery, TaggedIndex};
pub use error::TagdexError;
