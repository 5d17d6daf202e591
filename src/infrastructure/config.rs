//! Configuration management

use crate::error::{Result, TagdexError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_DIR: &str = ".tagdex";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Manifest path, relative to the workspace root unless absolute
    pub manifest: PathBuf,
    /// Lowercase tags from the manifest and from queries
    pub case_insensitive: bool,
    /// Default log filter when TAGDEX_LOG is unset
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            manifest: PathBuf::from("tags.toml"),
            case_insensitive: true,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load config from .tagdex/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TagdexError::NotTagdexDirectory(path.to_path_buf())
            } else {
                TagdexError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| TagdexError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .tagdex/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let config_dir = path.join(CONFIG_DIR);

        if !config_dir.exists() {
            fs::create_dir(&config_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILE), contents)?;

        Ok(())
    }

    /// Manifest location, checking TAGDEX_MANIFEST first
    pub fn manifest_path(&self, root: &Path) -> PathBuf {
        let manifest = std::env::var_os("TAGDEX_MANIFEST")
            .map(PathBuf::from)
            .unwrap_or_else(|| self.manifest.clone());

        if manifest.is_absolute() {
            manifest
        } else {
            root.join(manifest)
        }
    }
}
