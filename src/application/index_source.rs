//! Locate the manifest for a command and build the index from it

use crate::domain::TaggedIndex;
use crate::error::{Result, TagdexError};
use crate::infrastructure::{Config, FileSystemRepository, Manifest, TagRepository};
use std::path::{Path, PathBuf};

/// An index built from a manifest, plus the configuration it was built under
#[derive(Debug, Clone)]
pub struct LoadedIndex {
    pub index: TaggedIndex<String, String>,
    pub config: Config,
    pub manifest_path: PathBuf,
}

impl LoadedIndex {
    /// Apply the configured tag case rule to a user-supplied tag
    pub fn normalize_tag(&self, tag: &str) -> String {
        if self.config.case_insensitive {
            tag.to_lowercase()
        } else {
            tag.to_string()
        }
    }

    pub fn normalize_tags(&self, tags: &[String]) -> Vec<String> {
        tags.iter().map(|tag| self.normalize_tag(tag)).collect()
    }
}

/// Resolve and load the index for the current invocation.
///
/// An explicit manifest path wins. Otherwise the workspace found via
/// [`FileSystemRepository::discover`] supplies config and manifest, and
/// outside any workspace `tags.toml` in the current directory is used.
pub fn load_index(manifest_override: Option<&Path>) -> Result<LoadedIndex> {
    let workspace = match FileSystemRepository::discover() {
        Ok(repo) => Some(repo),
        Err(TagdexError::NotTagdexDirectory(_)) => None,
        Err(e) => return Err(e),
    };

    let current_dir = std::env::current_dir()?;
    load_from(workspace.as_ref(), &current_dir, manifest_override)
}

/// Load through `workspace` when present, else from `fallback_root`
pub fn load_from<R: TagRepository>(
    workspace: Option<&R>,
    fallback_root: &Path,
    manifest_override: Option<&Path>,
) -> Result<LoadedIndex> {
    let config = match workspace {
        Some(repo) => repo.load_config()?,
        None => Config::default(),
    };

    let manifest_path = match (manifest_override, workspace) {
        (Some(path), _) => path.to_path_buf(),
        (None, Some(repo)) => config.manifest_path(repo.root()),
        (None, None) => config.manifest_path(fallback_root),
    };

    tracing::info!(manifest = %manifest_path.display(), "loading manifest");
    let manifest = match (manifest_override, workspace) {
        (None, Some(repo)) => repo.load_manifest(&config)?,
        _ => Manifest::load(&manifest_path)?,
    };
    let index = manifest.build_index(config.case_insensitive);

    Ok(LoadedIndex {
        index,
        config,
        manifest_path,
    })
}
