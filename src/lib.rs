//! Name Suggest Library
//!
//! A prefix-search index for autocomplete, plus the small host that seeds it
//! from a name corpus and turns keystrokes into suggestion lists.
//!
//! # Architecture
//!
//! - [`data_structures::PrefixIndex`] is the core: an infallible, append-only
//!   trie answering "every stored string starting with this prefix".
//! - [`seed`] reads the startup corpus (plain lines or a JSON listing).
//! - [`host::SuggestionHost`] owns the index and applies the display rules
//!   (empty query shows nothing, result count is capped).
//! - [`config`] and [`error`] carry the layered configuration and the error
//!   types for everything around the index.

pub mod config;
pub mod data_structures;
pub mod error;
pub mod host;
pub mod seed;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;
