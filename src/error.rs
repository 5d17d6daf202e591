//! Error types for tagdex
//!
//! The index itself never fails; these cover the workspace, manifest and
//! query layers around it.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tagdex
#[derive(Debug, Error)]
pub enum TagdexError {
    #[error("Not a tagdex directory: {0}")]
    NotTagdexDirectory(PathBuf),

    #[error("Manifest not found: {0}")]
    ManifestNotFound(PathBuf),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl TagdexError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TagdexError::NotTagdexDirectory(_) => 2,
            TagdexError::InvalidQuery(_) => 3,
            TagdexError::ManifestNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TagdexError::NotTagdexDirectory(path) => {
                format!(
                    "Not a tagdex directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'tagdex init' in this directory to create a workspace\n\
                    • Set TAGDEX_ROOT to an existing workspace\n\
                    • Pass --manifest to query a manifest file directly",
                    path.display()
                )
            }
            TagdexError::ManifestNotFound(path) => {
                format!(
                    "Manifest not found: {}\n\n\
                    A manifest lists values and their tags:\n\n\
                    [values]\n\
                    \"report.pdf\" = [\"work\", \"urgent\"]\n\n\
                    Suggestions:\n\
                    • Pass --manifest <PATH>\n\
                    • Set TAGDEX_MANIFEST\n\
                    • Set 'manifest' in .tagdex/config.toml",
                    path.display()
                )
            }
            TagdexError::InvalidQuery(msg) => {
                format!(
                    "Invalid query: {}\n\n\
                    Queries combine tags with AND, OR, NOT and parentheses.\n\
                    Examples:\n\
                    tagdex query 'work AND urgent'\n\
                    tagdex query '(work OR personal) AND NOT done'",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TagdexError
pub type Result<T> = std::result::Result<T, TagdexError>;
