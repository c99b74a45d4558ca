//! Error module for the name suggestion host.
//!
//! The prefix index itself never fails. Everything fallible (configuration,
//! reading and parsing the seed corpus, command-line I/O) reports through the
//! types defined here.

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use once_cell::sync::OnceCell;
use thiserror::Error;

pub mod config;
pub mod seed;

/// Result type alias used throughout the crate.
pub type SuggestResult<T> = Result<T, SuggestError>;

/// Core error enum for the name suggestion host.
#[derive(Error, Debug)]
pub enum SuggestError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors occurring while loading seed names.
    #[error("Seed error: {0}")]
    Seed(#[from] seed::SeedError),

    /// IO errors from the terminal or from writing files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

/// Error reporting structure to provide context and debugging information.
#[derive(Debug)]
pub struct ErrorContext {
    /// The original error that occurred.
    pub error: SuggestError,

    /// The component where the error occurred.
    pub component: String,

    /// Additional context information to help with debugging.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Creates a new error context with the given error and component.
    ///
    /// # Arguments
    ///
    /// * `error` - The error that occurred
    /// * `component` - The component where the error occurred
    pub fn new<S: Into<String>>(error: SuggestError, component: S) -> Self {
        Self {
            error,
            component: component.into(),
            details: None,
        }
    }

    /// Adds detail information to the error context.
    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in {}: {}", self.component, self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }
        Ok(())
    }
}

/// Error reporter trait for reporting recoverable errors to various sinks.
#[cfg_attr(test, mockall::automock)]
pub trait ErrorReporter: Send + Sync {
    /// Report an error with context.
    fn report(&self, context: ErrorContext);
}

/// Error reporter that logs errors using the tracing framework.
#[derive(Default, Debug, Clone, Copy)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: ErrorContext) {
        tracing::error!(
            error = %context.error,
            component = %context.component,
            details = context.details.as_deref().unwrap_or("None"),
            "Error reported"
        );
    }
}

/// Process-wide error reporter, installed at most once.
static ERROR_REPORTER: OnceCell<Arc<dyn ErrorReporter>> = OnceCell::new();

/// Set the global error reporter.
///
/// Returns `false` if a reporter was already installed; the first one wins.
pub fn set_error_reporter(reporter: Arc<dyn ErrorReporter>) -> bool {
    let installed = ERROR_REPORTER.set(reporter).is_ok();
    if !installed {
        tracing::warn!("Global error reporter was already set, ignoring new reporter");
    }
    installed
}

/// Get the global error reporter, falling back to [`TracingErrorReporter`].
pub fn error_reporter() -> Arc<dyn ErrorReporter> {
    ERROR_REPORTER
        .get()
        .cloned()
        .unwrap_or_else(|| Arc::new(TracingErrorReporter))
}
