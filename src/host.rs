//! Suggestion host.
//!
//! Owns the prefix index for the lifetime of a session, feeds it the seed
//! corpus and turns raw query text into the suggestion list that gets shown.

use std::path::Path;
use std::sync::Arc;

use crate::config::{SeedFormat, SuggestConfig};
use crate::data_structures::PrefixIndex;
use crate::error::{error_reporter, ErrorContext, ErrorReporter, SuggestError};
use crate::seed::load_seed;

/// Drives a [`PrefixIndex`] on behalf of an interactive search box.
pub struct SuggestionHost {
    index: PrefixIndex,
    config: SuggestConfig,
    reporter: Arc<dyn ErrorReporter>,
}

impl SuggestionHost {
    /// Creates a host with an empty index, reporting to the global error reporter.
    pub fn new(config: SuggestConfig) -> Self {
        Self::with_reporter(config, error_reporter())
    }

    /// Creates a host with an empty index and an explicit error reporter.
    pub fn with_reporter(config: SuggestConfig, reporter: Arc<dyn ErrorReporter>) -> Self {
        Self {
            index: PrefixIndex::new(),
            config,
            reporter,
        }
    }

    /// Inserts a batch of names.
    ///
    /// # Returns
    ///
    /// The number of names that were not already stored.
    pub fn seed<I, S>(&mut self, names: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let before = self.index.len();
        self.index.extend(names);
        let added = self.index.len() - before;

        tracing::info!(added, total = self.index.len(), "Seeded prefix index");
        added
    }

    /// Loads names from a seed file and inserts them.
    ///
    /// Names read before a failure are kept: a bad entry in the middle of a
    /// listing still leaves every earlier entry inserted. The failure itself
    /// is reported and the host keeps serving whatever it holds.
    ///
    /// # Returns
    ///
    /// The number of names that were not already stored.
    pub fn seed_from_path(&mut self, path: &Path, format: SeedFormat, json_field: &str) -> usize {
        let batch = match load_seed(path, format, json_field) {
            Ok(batch) => batch,
            Err(error) => {
                self.report_seed_failure(path, error);
                return 0;
            }
        };

        let added = self.seed(batch.names);
        if let Some(error) = batch.error {
            self.report_seed_failure(path, error.into());
        }
        added
    }

    fn report_seed_failure(&self, path: &Path, error: SuggestError) {
        tracing::warn!(path = %path.display(), "Seed load stopped early, continuing without the rest");
        self.reporter.report(
            ErrorContext::new(error, "seed").with_details(format!("path: {}", path.display())),
        );
    }

    /// Returns the suggestions for the current query text.
    ///
    /// The empty query and queries shorter than `min_query_chars` characters
    /// get no suggestions. Otherwise every match is returned in index order,
    /// capped at `max_results` when one is configured.
    pub fn suggest(&self, query: &str) -> Vec<String> {
        if query.is_empty() || query.chars().count() < self.config.min_query_chars {
            return Vec::new();
        }

        let limit = self.config.max_results.unwrap_or(usize::MAX);
        let suggestions: Vec<String> = self.index.iter_prefix(query).take(limit).collect();

        tracing::debug!(query, count = suggestions.len(), "Suggestions computed");
        suggestions
    }

    /// Picks suggestion `n` (zero-based) as the next query text.
    pub fn select(suggestions: &[String], n: usize) -> Option<String> {
        suggestions.get(n).cloned()
    }

    /// Returns the underlying index.
    pub fn index(&self) -> &PrefixIndex {
        &self.index
    }

    /// Returns the active suggestion settings.
    pub fn config(&self) -> &SuggestConfig {
        &self.config
    }
}

/// One line typed at the interactive prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptInput {
    /// `:q` ends the session
    Quit,
    /// `:N` picks suggestion `N` of the last list
    Select(usize),
    /// A `:` command that is neither of the above
    Unknown(String),
    /// Anything else is query text, taken exactly as typed
    Query(String),
}

impl PromptInput {
    /// Interprets a line with its line terminator already removed.
    pub fn parse(line: &str) -> Self {
        match line.strip_prefix(':') {
            Some("q") => Self::Quit,
            Some(command) => match command.parse::<usize>() {
                Ok(n) => Self::Select(n),
                Err(_) => Self::Unknown(command.to_string()),
            },
            None => Self::Query(line.to_string()),
        }
    }
}
