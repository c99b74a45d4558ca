// Copyright (c) 2025 Name Suggest Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the prefix index.
//!
//! Each node is one position along a prefix path. Children are owned directly
//! by their parent, so a node's identity is the character path that reaches it.

use std::collections::BTreeMap;

/// A node in the prefix index.
#[derive(Debug, Default)]
pub struct TrieNode {
    /// Child nodes keyed by the next character, iterated in ascending order
    pub children: BTreeMap<char, TrieNode>,

    /// Whether the path from the root to this node is a stored string
    pub is_terminal: bool,
}

impl TrieNode {
    /// Creates a new empty, non-terminal node.
    pub fn new() -> Self {
        Self {
            children: BTreeMap::new(),
            is_terminal: false,
        }
    }
}
