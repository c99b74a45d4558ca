// Copyright (c) 2025 Name Suggest Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Prefix Index Implementation
//!
//! This module provides a character-keyed trie that stores a growing set of
//! strings and returns every stored string sharing a prefix. It backs the
//! autocomplete host: names are inserted once at startup and the index is
//! queried on every keystroke.
//!
//! Characters are Rust `char`s (Unicode scalar values); no normalisation or
//! case folding is applied. Results come back in lexicographic `char` order.

mod iter;
mod node;

use std::fmt;

pub use iter::PrefixIter;
use node::TrieNode;

/// Prefix index is an append-only set of strings with fast prefix retrieval.
///
/// Key features:
/// * Insert is idempotent; duplicate strings collapse to a single entry
/// * Search short-circuits as soon as the prefix leaves the tree
/// * Collection uses an explicit stack, so long shared prefixes cannot
///   exhaust the call stack
/// * Single writer: mutation takes `&mut self`, reads take `&self`
///
/// # Examples
///
/// ```
/// use name_suggest_lib::data_structures::PrefixIndex;
///
/// let mut index = PrefixIndex::new();
/// index.insert("alice");
/// index.insert("alan");
/// index.insert("bob");
///
/// assert_eq!(index.search("al"), vec!["alan", "alice"]);
/// assert!(index.search("z").is_empty());
/// ```
pub struct PrefixIndex {
    /// The root node, representing the empty prefix
    root: TrieNode,

    /// Number of distinct stored strings
    len: usize,

    /// Number of nodes in the tree, root included
    nodes: usize,
}

impl PrefixIndex {
    /// Creates a new empty `PrefixIndex`.
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
            len: 0,
            nodes: 1,
        }
    }

    /// Inserts a string into the index.
    ///
    /// Missing nodes along the path are created and the final node is marked
    /// as the end of a stored string. Inserting a string that is already
    /// stored leaves the index unchanged. The empty string marks the root.
    ///
    /// # Arguments
    ///
    /// * `word` - The string to store.
    pub fn insert<W>(&mut self, word: W)
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        let mut created = 0usize;

        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.children.entry(c).or_insert_with(|| {
                created += 1;
                TrieNode::new()
            });
        }

        if !node.is_terminal {
            node.is_terminal = true;
            self.len += 1;
        }
        self.nodes += created;

        tracing::trace!(word, created, len = self.len, "Inserted into prefix index");
    }

    /// Returns every stored string that starts with `prefix`.
    ///
    /// The result is empty when no stored string starts with `prefix`. A
    /// stored string that is itself a prefix of longer stored strings comes
    /// before them.
    ///
    /// # Arguments
    ///
    /// * `prefix` - The prefix to search for.
    pub fn search<P>(&self, prefix: P) -> Vec<String>
    where
        P: AsRef<str>,
    {
        self.iter_prefix(prefix).collect()
    }

    /// Returns a lazy iterator over every stored string that starts with
    /// `prefix`, in the same order as [`search`](Self::search).
    ///
    /// Useful when only the first few suggestions are needed.
    pub fn iter_prefix<P>(&self, prefix: P) -> PrefixIter<'_>
    where
        P: AsRef<str>,
    {
        let prefix = prefix.as_ref();
        match self.find_node(prefix) {
            Some(node) => PrefixIter::new(node, prefix),
            None => PrefixIter::empty(),
        }
    }

    /// Checks whether exactly `word` has been stored.
    pub fn contains<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        self.find_node(word.as_ref())
            .map_or(false, |node| node.is_terminal)
    }

    /// Returns the number of distinct stored strings.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing has been stored, not even the empty string.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes in the tree, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    /// Walks from the root along `prefix`, stopping at the first missing child.
    fn find_node(&self, prefix: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in prefix.chars() {
            node = node.children.get(&c)?;
        }
        Some(node)
    }
}

impl Default for PrefixIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PrefixIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixIndex")
            .field("len", &self.len)
            .field("nodes", &self.nodes)
            .finish()
    }
}

impl Drop for PrefixIndex {
    // Dismantle the tree iteratively; the default drop would recurse once per
    // character of the longest stored string.
    fn drop(&mut self) {
        let mut pending: Vec<TrieNode> = std::mem::take(&mut self.root.children)
            .into_values()
            .collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}

impl<S> Extend<S> for PrefixIndex
where
    S: AsRef<str>,
{
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

impl<S> FromIterator<S> for PrefixIndex
where
    S: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}
