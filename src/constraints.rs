//! Declarative field constraints
//!
//! The limits enforced by [`crate::validation`] are plain data so an
//! application can tune them from a TOML file. Keys missing from the file
//! keep their default value.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Length limits for task and tag fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConstraints {
    /// Minimum number of characters in a task title
    #[serde(default = "default_title_min_len")]
    pub title_min_len: usize,

    /// Maximum number of characters in a task title
    #[serde(default = "default_title_max_len")]
    pub title_max_len: usize,

    /// Maximum number of characters in a tag name
    #[serde(default = "default_tag_name_max_len")]
    pub tag_name_max_len: usize,
}

impl Default for FieldConstraints {
    fn default() -> Self {
        Self {
            title_min_len: default_title_min_len(),
            title_max_len: default_title_max_len(),
            tag_name_max_len: default_tag_name_max_len(),
        }
    }
}

fn default_title_min_len() -> usize {
    3
}

fn default_title_max_len() -> usize {
    25
}

fn default_tag_name_max_len() -> usize {
    24
}

impl FieldConstraints {
    /// Parse constraints from a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let constraints: FieldConstraints =
            toml::from_str(content).context("Failed to parse field constraints")?;
        constraints.check()?;
        Ok(constraints)
    }

    /// Load constraints from a TOML file, or use the defaults if it does not exist
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "constraints file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let constraints = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), ?constraints, "loaded field constraints");
        Ok(constraints)
    }

    fn check(&self) -> Result<()> {
        if self.title_min_len > self.title_max_len {
            bail!(
                "title_min_len ({}) is greater than title_max_len ({})",
                self.title_min_len,
                self.title_max_len
            );
        }
        Ok(())
    }
}
