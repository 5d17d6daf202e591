//! File system repository

use crate::error::{Result, TagdexError};
use crate::infrastructure::config::CONFIG_DIR;
use crate::infrastructure::{Config, Manifest};
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract repository for tagdex workspaces
pub trait TagRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .tagdex/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .tagdex/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Load the manifest the configuration points at
    fn load_manifest(&self, config: &Config) -> Result<Manifest>;

    /// Check if .tagdex directory exists
    fn is_initialized(&self) -> bool;

    /// Create .tagdex directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of TagRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Find the workspace root.
    /// TAGDEX_ROOT wins when set; otherwise walk up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("TAGDEX_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_tagdex_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            }
            return Err(TagdexError::Config(format!(
                "TAGDEX_ROOT is set to '{}' but no .tagdex directory found. \
                Run 'tagdex init' in that directory or unset TAGDEX_ROOT.",
                path.display()
            )));
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Walk up from `start` until a directory containing .tagdex is found
    pub fn discover_from(start: &Path) -> Result<Self> {
        start
            .ancestors()
            .find(|dir| Self::has_tagdex_dir(dir))
            .map(|dir| FileSystemRepository::new(dir.to_path_buf()))
            .ok_or_else(|| TagdexError::NotTagdexDirectory(start.to_path_buf()))
    }

    fn has_tagdex_dir(path: &Path) -> bool {
        path.join(CONFIG_DIR).is_dir()
    }
}

impl TagRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn load_manifest(&self, config: &Config) -> Result<Manifest> {
        Manifest::load(&config.manifest_path(&self.root))
    }

    fn is_initialized(&self) -> bool {
        Self::has_tagdex_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        if self.is_initialized() {
            return Err(TagdexError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(self.root.join(CONFIG_DIR))?;
        Ok(())
    }
}
