//! Application layer - Use cases and orchestration

pub mod index_source;
pub mod init;
pub mod lookup;
pub mod manage_config;
pub mod query_index;

pub use index_source::{load_index, LoadedIndex};
pub use lookup::{LookupService, SetOperation};
pub use manage_config::ConfigService;
pub use query_index::QueryService;
