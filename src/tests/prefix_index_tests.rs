// Copyright (c) 2025 Name Suggest Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Property-based tests for the prefix index.

use proptest::prelude::*;
use std::collections::BTreeSet;

use crate::data_structures::PrefixIndex;
use crate::tests::{corpus_strategy, word_strategy};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Property: a freshly inserted word is found by searching for itself
    #[test]
    fn prop_single_insert_found(word in word_strategy()) {
        let mut index = PrefixIndex::new();
        index.insert(&word);
        prop_assert_eq!(index.search(&word), vec![word.clone()]);
        prop_assert!(index.contains(&word));
    }

    // Property: inserting the same word again changes nothing
    #[test]
    fn prop_insert_is_idempotent(corpus in corpus_strategy(), word in word_strategy()) {
        let mut once: PrefixIndex = corpus.iter().collect();
        once.insert(&word);

        let mut twice: PrefixIndex = corpus.iter().collect();
        twice.insert(&word);
        twice.insert(&word);

        prop_assert_eq!(once.search(""), twice.search(""));
        prop_assert_eq!(once.len(), twice.len());
        prop_assert_eq!(once.node_count(), twice.node_count());
    }

    // Property: search returns exactly the distinct stored words with the prefix, sorted
    #[test]
    fn prop_search_matches_filter(corpus in corpus_strategy(), prefix in word_strategy()) {
        let index: PrefixIndex = corpus.iter().collect();

        let expected: Vec<String> = corpus
            .iter()
            .filter(|w| w.starts_with(prefix.as_str()))
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        prop_assert_eq!(index.search(&prefix), expected);
    }

    // Property: no stored word starts with the prefix implies an empty result
    #[test]
    fn prop_unmatched_prefix_is_empty(corpus in corpus_strategy()) {
        let index: PrefixIndex = corpus.iter().collect();
        // 'd' is outside the generated alphabet.
        prop_assert!(index.search("d").is_empty());
        prop_assert!(index.search("ad").is_empty());
    }

    // Property: a stored prefix of another stored word appears before it
    #[test]
    fn prop_prefix_word_precedes_extension(short in word_strategy(), tail in word_strategy()) {
        let long = format!("{short}{tail}");
        let mut index = PrefixIndex::new();
        index.insert(&long);
        index.insert(&short);

        let results = index.search(&short);
        prop_assert!(results.contains(&short));
        prop_assert!(results.contains(&long));
        prop_assert_eq!(&results[0], &short);
    }

    // Property: len counts distinct words
    #[test]
    fn prop_len_counts_distinct(corpus in corpus_strategy()) {
        let index: PrefixIndex = corpus.iter().collect();
        let distinct: BTreeSet<&String> = corpus.iter().collect();
        prop_assert_eq!(index.len(), distinct.len());
        prop_assert_eq!(index.search("").len(), distinct.len());
    }

    // Property: the lazy iterator agrees with search
    #[test]
    fn prop_iter_prefix_agrees(corpus in corpus_strategy(), prefix in word_strategy(), n in 0usize..10) {
        let index: PrefixIndex = corpus.iter().collect();
        let lazy: Vec<String> = index.iter_prefix(&prefix).take(n).collect();
        let eager: Vec<String> = index.search(&prefix).into_iter().take(n).collect();
        prop_assert_eq!(lazy, eager);
    }
}

#[test]
fn test_alice_alan_bob_scenario() {
    let mut index = PrefixIndex::new();
    index.insert("alice");
    index.insert("alan");
    index.insert("bob");

    let al: BTreeSet<String> = index.search("al").into_iter().collect();
    assert_eq!(al, BTreeSet::from(["alice".to_string(), "alan".to_string()]));
    assert_eq!(index.search("b"), vec!["bob"]);
    assert!(index.search("z").is_empty());
    assert_eq!(index.search(""), vec!["alan", "alice", "bob"]);
}

#[test]
fn test_duplicate_then_extension_scenario() {
    let mut index = PrefixIndex::new();
    index.insert("a");
    index.insert("a");
    index.insert("ab");

    assert_eq!(index.search("a"), vec!["a", "ab"]);
}
