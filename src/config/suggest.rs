//! Suggestion configuration module.
//!
//! This module defines how queries are turned into suggestion lists: whether
//! the number of results is capped and how short a query may be before it
//! yields nothing.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Suggestion configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuggestConfig {
    /// Maximum number of suggestions returned for one query (None shows every match)
    pub max_results: Option<usize>,

    /// Queries with fewer characters than this produce no suggestions
    pub min_query_chars: usize,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            max_results: None,
            min_query_chars: 1,
        }
    }
}

impl Validate for SuggestConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_results == Some(0) {
            return Err(ConfigError::ValueOutOfRange {
                key: "suggest.max_results".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}
