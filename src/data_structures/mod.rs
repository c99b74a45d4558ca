//! Data structures for the name suggestion host.
//!
//! This module contains the in-process index that answers autocomplete
//! queries. It has no I/O and no fallible operations; everything that can
//! fail lives in the host around it.

pub mod prefix_index;

// Re-export common data structures
pub use prefix_index::{PrefixIndex, PrefixIter};
