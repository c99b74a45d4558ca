//! Seed corpus loading.
//!
//! The index is populated once at startup from a batch of names. This module
//! reads that batch from a file, either one name per line or a JSON listing
//! such as an array of user records with a `name` member.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::config::SeedFormat;
use crate::error::seed::SeedError;
use crate::error::SuggestResult;

/// Names read from a seed source.
///
/// Parsing stops at the first bad entry; `names` holds everything before it
/// and `error` says why reading stopped.
#[derive(Debug, Default)]
pub struct SeedBatch {
    /// Names in source order, duplicates included
    pub names: Vec<String>,

    /// The error that cut the batch short, if any
    pub error: Option<SeedError>,
}

impl SeedBatch {
    fn complete(names: Vec<String>) -> Self {
        Self { names, error: None }
    }

    fn failed(error: SeedError) -> Self {
        Self {
            names: Vec::new(),
            error: Some(error),
        }
    }

    /// Returns `true` if every entry of the source was read.
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }
}

/// Reads seed names from `path`.
///
/// # Arguments
///
/// * `path` - File to read
/// * `format` - Encoding of the file
/// * `json_field` - Object member holding the name, for JSON seeds
///
/// # Returns
///
/// * `Ok(SeedBatch)` - The names read, possibly cut short by a bad entry
/// * `Err(SuggestError)` - If the file cannot be read at all
pub fn load_seed(path: &Path, format: SeedFormat, json_field: &str) -> SuggestResult<SeedBatch> {
    let contents = fs::read_to_string(path).map_err(|source| SeedError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let batch = parse_seed(&contents, format, json_field);
    tracing::info!(
        path = %path.display(),
        ?format,
        count = batch.names.len(),
        complete = batch.is_complete(),
        "Seed file loaded"
    );

    Ok(batch)
}

/// Parses seed names from an in-memory document.
pub fn parse_seed(contents: &str, format: SeedFormat, json_field: &str) -> SeedBatch {
    match format {
        SeedFormat::Lines => SeedBatch::complete(parse_lines(contents)),
        SeedFormat::Json => parse_json(contents, json_field),
    }
}

fn parse_lines(contents: &str) -> Vec<String> {
    // `lines` already strips a trailing `\r`.
    contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_owned)
        .collect()
}

fn parse_json(contents: &str, json_field: &str) -> SeedBatch {
    let entries = match serde_json::from_str::<Value>(contents) {
        Ok(Value::Array(entries)) => entries,
        Ok(other) => return SeedBatch::failed(SeedError::NotAnArray(json_kind(&other).to_string())),
        Err(e) => return SeedBatch::failed(e.into()),
    };

    let mut names = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        let name = match entry {
            Value::String(name) => Some(name),
            Value::Object(mut fields) => match fields.remove(json_field) {
                Some(Value::String(name)) => Some(name),
                _ => None,
            },
            _ => None,
        };

        match name {
            Some(name) => names.push(name),
            None => {
                return SeedBatch {
                    names,
                    error: Some(SeedError::MissingField {
                        index,
                        field: json_field.to_string(),
                    }),
                }
            }
        }
    }

    SeedBatch::complete(names)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
