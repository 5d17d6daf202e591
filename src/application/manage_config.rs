//! Config management use case

use crate::error::{Result, TagdexError};
use crate::infrastructure::{Config, FileSystemRepository, TagRepository};
use std::path::PathBuf;

const VALID_KEYS: &str = "manifest, case_insensitive, log_level";

/// Service for managing workspace configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "manifest" => Ok(config.manifest.display().to_string()),
            "case_insensitive" => Ok(config.case_insensitive.to_string()),
            "log_level" => Ok(config.log_level),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "manifest" => config.manifest = PathBuf::from(value),
            "case_insensitive" => {
                config.case_insensitive = value.parse().map_err(|_| {
                    TagdexError::Config(format!(
                        "Invalid value for case_insensitive: '{}'. Use true or false",
                        value
                    ))
                })?;
            }
            "log_level" => config.log_level = value.to_string(),
            _ => return Err(unknown_key(key)),
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

fn unknown_key(key: &str) -> TagdexError {
    TagdexError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key, VALID_KEYS
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::init::init;
    use tempfile::TempDir;

    fn service(temp: &TempDir) -> ConfigService {
        init(temp.path()).unwrap();
        ConfigService::new(FileSystemRepository::new(temp.path().to_path_buf()))
    }

    #[test]
    fn test_get_defaults() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert_eq!(service.get("manifest").unwrap(), "tags.toml");
        assert_eq!(service.get("case_insensitive").unwrap(), "true");
        assert_eq!(service.get("log_level").unwrap(), "warn");
    }

    #[test]
    fn test_set_then_get() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        service.set("case_insensitive", "false").unwrap();
        service.set("manifest", "catalog.toml").unwrap();

        assert_eq!(service.get("case_insensitive").unwrap(), "false");
        assert_eq!(service.list().unwrap().manifest, PathBuf::from("catalog.toml"));
    }

    #[test]
    fn test_set_invalid_bool() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert!(matches!(
            service.set("case_insensitive", "maybe"),
            Err(TagdexError::Config(_))
        ));
    }

    #[test]
    fn test_unknown_key() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        let err = service.get("editor").unwrap_err();
        assert!(err.to_string().contains("Valid keys"));
        assert!(service.set("editor", "vim").is_err());
    }
}
