//! Tests for the error module.

use crate::config::{ConfigLoader, ENV_PREFIX};
use crate::error::{
    config::ConfigError, error_reporter, set_error_reporter, seed::SeedError, ErrorContext,
    ErrorReporter, SuggestError, SuggestResult, TracingErrorReporter,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = SuggestError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component").with_details("additional details");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("test_component"));
    assert!(display_string.contains("additional details"));
}

/// Test that nested errors work correctly.
#[test]
fn test_nested_errors() {
    let seed_error = SeedError::MissingField {
        index: 4,
        field: "name".to_string(),
    };
    let error: SuggestError = seed_error.into();

    assert_eq!(
        error.to_string(),
        "Seed error: Seed entry 4 has no string field 'name'"
    );
}

#[test]
fn test_seed_read_error_keeps_source() {
    let error = SeedError::Read {
        path: "names.txt".into(),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
    };

    let message = error.to_string();
    assert!(message.contains("names.txt"));
    assert!(message.contains("file not found"));
    assert!(std::error::Error::source(&error).is_some());
}

/// Test that I/O and configuration failures surface as their own variants
/// when propagated with `?`.
#[test]
fn test_question_mark_conversions() {
    fn write_to_closed_pipe() -> SuggestResult<()> {
        Err::<(), _>(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed"))?;
        Ok(())
    }

    fn load_missing() -> SuggestResult<()> {
        ConfigLoader::new(Some("/nonexistent/name_suggest.toml"), ENV_PREFIX).load()?;
        Ok(())
    }

    let error = write_to_closed_pipe().unwrap_err();
    assert!(matches!(error, SuggestError::Io(_)));
    assert_eq!(error.to_string(), "IO error: pipe closed");

    let error = load_missing().unwrap_err();
    assert!(matches!(error, SuggestError::Config(ConfigError::FileNotFound(_))));
}

/// Counting reporter used to observe the global reporter.
#[derive(Debug, Default)]
struct CountingReporter {
    reported_count: AtomicUsize,
}

impl ErrorReporter for CountingReporter {
    fn report(&self, _context: ErrorContext) {
        self.reported_count.fetch_add(1, Ordering::SeqCst);
    }
}

/// The only test in this crate that touches the global reporter.
#[test]
fn test_global_error_reporter() {
    let reporter = Arc::new(CountingReporter::default());
    assert!(set_error_reporter(reporter.clone()));
    assert!(!set_error_reporter(Arc::new(TracingErrorReporter)));

    let context = ErrorContext::new(SuggestError::Custom("test error".to_string()), "test");
    error_reporter().report(context);

    assert_eq!(reporter.reported_count.load(Ordering::SeqCst), 1);
}

/// Test that the default tracing error reporter can be created.
#[test]
fn test_tracing_error_reporter() {
    let reporter = TracingErrorReporter;
    let context = ErrorContext::new(SuggestError::Custom("test error".to_string()), "test");

    // Just make sure this doesn't panic
    reporter.report(context);
}
