// Copyright (c) 2025 Name Suggest Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lazy pre-order traversal over the strings stored below a node.

use std::iter::FusedIterator;

use super::node::TrieNode;

/// Iterator over every stored string that starts with a given prefix.
///
/// Created by [`PrefixIndex::iter_prefix`](super::PrefixIndex::iter_prefix).
/// Walks the subtree with an explicit stack, so the depth of the tree never
/// turns into call depth. A terminal node is yielded before any of its
/// descendants, and siblings are visited in ascending `char` order, which makes
/// the output lexicographically sorted.
#[derive(Debug)]
pub struct PrefixIter<'a> {
    /// Pending nodes with the byte length of their parent's path and the
    /// character that leads to them (`None` for the starting node)
    stack: Vec<(&'a TrieNode, usize, Option<char>)>,

    /// Path of the node popped last
    path: String,
}

impl<'a> PrefixIter<'a> {
    pub(super) fn new(start: &'a TrieNode, prefix: &str) -> Self {
        Self {
            stack: vec![(start, prefix.len(), None)],
            path: prefix.to_owned(),
        }
    }

    pub(super) fn empty() -> Self {
        Self {
            stack: Vec::new(),
            path: String::new(),
        }
    }
}

impl Iterator for PrefixIter<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, parent_len, c)) = self.stack.pop() {
            // Everything popped since the parent lies in the parent's subtree,
            // so the buffer still starts with the parent's path.
            self.path.truncate(parent_len);
            if let Some(c) = c {
                self.path.push(c);
            }

            let len = self.path.len();
            // Reverse so the smallest character is popped first.
            for (c, child) in node.children.iter().rev() {
                self.stack.push((child, len, Some(*c)));
            }

            if node.is_terminal {
                return Some(self.path.clone());
            }
        }

        None
    }
}

impl FusedIterator for PrefixIter<'_> {}
