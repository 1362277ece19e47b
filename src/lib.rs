//! # libptrie
//!
//! A frequency-ranked prefix [trie](https://en.wikipedia.org/wiki/Trie) for autocompletion.
//!
//! Strings are registered with [`PrefixTrie::insert`](ptrie::PrefixTrie::insert); registering
//! the same string again raises its frequency. [`PrefixTrie::complete`](ptrie::PrefixTrie::complete)
//! then returns the most frequently registered string that starts with a query prefix, breaking
//! ties by picking the lexicographically smallest candidate.
//!
//! ## Features
//!
//! - **Printable ASCII alphabet**: the 95 characters from `' '` to `'~'`; anything else is
//!   rejected at insertion without touching the trie
//! - **Deterministic**: completions depend only on what was inserted, never on insertion order
//! - **Exclusive ownership**: every node is owned by exactly one parent, and teardown is
//!   iterative so very deep tries drop without exhausting the stack
//! - **Fallible growth**: allocation failures while growing the trie are reported as
//!   [`TrieError::AllocationFailure`](ptrie::TrieError::AllocationFailure)
//!
//! ## Quick Start
//!
//! ```
//! use libptrie::ptrie::PrefixTrie;
//!
//! let mut trie = PrefixTrie::new();
//! for word in ["he", "hey", "hello", "hello", "helloworld"] {
//!     trie.insert(word).unwrap();
//! }
//! assert_eq!(trie.complete("h"), "hello");
//!
//! trie.insert("hey").unwrap();
//! trie.insert("hey").unwrap();
//! assert_eq!(trie.complete("h"), "hey");
//!
//! // Nothing starts with "x", so the query is echoed back.
//! assert_eq!(trie.complete("x"), "x");
//! ```
//!
//! ## Completion Policies
//!
//! By default an exact match wins over longer completions. The
//! [`MostFrequent`](ptrie::CompletionPolicy::MostFrequent) policy lets the query itself
//! compete with its extensions on frequency:
//!
//! ```
//! use libptrie::ptrie::{CompletionPolicy, PrefixTrie};
//!
//! let mut trie = PrefixTrie::with_policy(CompletionPolicy::MostFrequent);
//! for word in ["A", "AC", "AC"] {
//!     trie.insert(word).unwrap();
//! }
//! assert_eq!(trie.complete("A"), "AC");
//! ```

#![warn(missing_docs)]

/// Prefix trie data structure: nodes, alphabet, completion search and helpers.
pub mod ptrie;
