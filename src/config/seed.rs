//! Seed configuration module.
//!
//! This module defines where the names inserted at startup come from and how
//! they are encoded.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Encoding of a seed file.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SeedFormat {
    /// One name per line
    #[default]
    Lines,
    /// A JSON array of strings or of objects carrying a name field
    Json,
}

impl SeedFormat {
    /// Infers the format from a file extension, defaulting to [`SeedFormat::Lines`].
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Lines,
        }
    }
}

/// Seed configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeedConfig {
    /// Path to the seed file (None starts with an empty index)
    pub path: Option<PathBuf>,

    /// Encoding of the seed file (None infers it from the extension)
    pub format: Option<SeedFormat>,

    /// Object member holding the name in JSON seeds
    pub json_field: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            path: None,
            format: None,
            json_field: "name".to_string(),
        }
    }
}

impl SeedConfig {
    /// Returns the configured format, or the one implied by `path`.
    pub fn format_for(&self, path: &Path) -> SeedFormat {
        self.format.unwrap_or_else(|| SeedFormat::from_path(path))
    }
}

impl Validate for SeedConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.json_field.is_empty() {
            return Err(ConfigError::ValidationError(
                "json_field must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
