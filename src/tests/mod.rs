//! Test modules for the name suggestion crate.
//!
//! Unit tests live next to the code they cover; the suites here exercise
//! behaviour across modules:
//! - Property-based tests for the prefix index using proptest
//! - Configuration layering (defaults, files, environment)
//! - Error formatting and reporting

pub mod error_tests;
pub mod prefix_index_tests;

pub use test_utils::{corpus_strategy, word_strategy, TestFixture};
