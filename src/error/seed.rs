//! Seed error module.
//!
//! This module defines error types that may occur while reading the batch of
//! names used to populate the index at startup.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading seed names.
#[derive(Error, Debug)]
pub enum SeedError {
    /// Error when the seed file cannot be read.
    #[error("Failed to read seed file {path}: {source}")]
    Read {
        /// Path of the seed file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Error when the seed file is not valid JSON.
    #[error("Malformed JSON seed: {0}")]
    MalformedJson(#[from] serde_json::Error),

    /// Error when the top-level JSON value is not an array.
    #[error("JSON seed must be an array, got {0}")]
    NotAnArray(String),

    /// Error when a seed entry does not carry the configured string field.
    #[error("Seed entry {index} has no string field '{field}'")]
    MissingField {
        /// Position of the entry in the array
        index: usize,
        /// The field that was expected
        field: String,
    },
}
