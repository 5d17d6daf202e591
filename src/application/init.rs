//! Initialize workspace use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, Manifest, TagRepository};
use std::fs;
use std::path::{Path, PathBuf};

/// Create a tagdex workspace at `path`.
///
/// Writes the default `.tagdex/config.toml` and, when absent, an empty
/// manifest. Returns the manifest location.
pub fn init(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;

    let config = Config::default();
    repo.save_config(&config)?;

    let manifest_path = path.join(&config.manifest);
    if !manifest_path.exists() {
        fs::write(&manifest_path, Manifest::default().to_toml_string()?)?;
    }

    tracing::info!(root = %path.display(), "initialized workspace");
    Ok(manifest_path)
}
