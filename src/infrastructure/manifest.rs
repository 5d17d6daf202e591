//! Tag manifest: a TOML listing of values and their tags
//!
//! ```toml
//! [values]
//! "report.pdf" = ["work", "urgent"]
//! "photo.jpg" = ["personal"]
//! ```

use crate::domain::TaggedIndex;
use crate::error::{Result, TagdexError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub values: BTreeMap<String, Vec<String>>,
}

impl Manifest {
    /// Read a manifest file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TagdexError::ManifestNotFound(path.to_path_buf())
            } else {
                TagdexError::Io(e)
            }
        })?;

        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Build an index with one assignment per manifest entry.
    ///
    /// Entries without tags never enter the index.
    pub fn build_index(&self, case_insensitive: bool) -> TaggedIndex<String, String> {
        let mut index = TaggedIndex::new();

        for (value, tags) in &self.values {
            if tags.is_empty() {
                tracing::warn!(value = %value, "manifest entry has no tags; skipped");
                continue;
            }

            let tags = tags.iter().map(|tag| {
                if case_insensitive {
                    tag.to_lowercase()
                } else {
                    tag.clone()
                }
            });
            index.assign(value.clone(), tags);
        }

        tracing::debug!(
            values = index.value_count(),
            tags = index.tag_count(),
            "built index from manifest"
        );
        index
    }
}
