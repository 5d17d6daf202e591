//! Domain layer - The tag index and its query language

pub mod index;
pub mod query;

pub use index::TaggedIndex;
pub use query::TagQuery;
