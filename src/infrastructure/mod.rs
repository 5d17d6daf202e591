//! Infrastructure layer - Configuration, manifests and workspace discovery

pub mod config;
pub mod manifest;
pub mod repository;

pub use config::Config;
pub use manifest::Manifest;
pub use repository::{FileSystemRepository, TagRepository};
