use std::fmt;

use smallvec::{smallvec, SmallVec};
use tracing::{debug, trace};

use super::error::TrieError;
use super::node::{Terminal, TrieNode};
use super::policy::CompletionPolicy;
use super::search::best_terminal;
use super::symbol::symbols;

/// A frequency-ranked prefix trie over printable ASCII.
///
/// The trie owns its root node, and through it every node and stored word.
/// Dropping the trie releases the whole structure.
///
/// # Examples
///
/// ```
/// use libptrie::ptrie::PrefixTrie;
///
/// let mut trie = PrefixTrie::new();
/// trie.insert("BCB").unwrap();
/// trie.insert("BB").unwrap();
///
/// assert_eq!(trie.complete("B"), "BB");
/// assert_eq!(trie.complete("BC"), "BCB");
/// assert_eq!(trie.complete("Q"), "Q");
///
/// assert!(trie.insert("tab\there").is_err());
/// assert_eq!(trie.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct PrefixTrie {
    root: TrieNode,
    len: usize,
    policy: CompletionPolicy,
}

impl PrefixTrie {
    /// Creates an empty trie using [`CompletionPolicy::ExactMatchFirst`].
    pub fn new() -> Self {
        PrefixTrie::default()
    }

    /// Creates an empty trie that completes according to `policy`.
    pub fn with_policy(policy: CompletionPolicy) -> Self {
        PrefixTrie {
            policy,
            ..PrefixTrie::default()
        }
    }

    /// Returns a reference to the root node.
    ///
    /// Use [`get()`](TrieNode::get), [`terminal()`](TrieNode::terminal) and
    /// [`children()`](TrieNode::children) to walk the structure.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// The completion policy chosen at construction.
    pub fn policy(&self) -> CompletionPolicy {
        self.policy
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if no word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds `word` to the trie, or bumps its count if it is already present.
    ///
    /// The empty string is a valid word and is stored on the root.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::InvalidInput`] if any character is outside `' '..='~'`.
    /// The whole word is checked before anything is modified, so a rejected
    /// word leaves the trie unchanged.
    ///
    /// Returns [`TrieError::AllocationFailure`] if the trie cannot grow. Nodes
    /// created along the path before the failure are kept, but carry no entry.
    pub fn insert(&mut self, word: &str) -> Result<(), TrieError> {
        let path = symbols(word).map_err(|e| {
            debug!(word, error = %e, "rejecting word");
            e
        })?;

        let node = path
            .iter()
            .try_fold(&mut self.root, |node, &symbol| node.child_or_try_insert(symbol))
            .map_err(|e| {
                debug!(word, "allocation failed while extending path");
                TrieError::from(e)
            })?;

        match node.terminal_mut() {
            Some(terminal) => {
                terminal.bump();
                trace!(word, count = terminal.count(), "bumped word");
            }
            slot => {
                *slot = Some(Terminal::try_new(word)?);
                self.len += 1;
                trace!(word, "stored new word");
            }
        }
        Ok(())
    }

    /// Returns the best completion of `prefix`.
    ///
    /// Under the default policy, a stored word equal to `prefix` is returned
    /// directly. Otherwise every word starting with `prefix` is considered and
    /// the one inserted most often wins; ties go to the lexicographically
    /// smallest word. If no stored word starts with `prefix`, a copy of
    /// `prefix` is returned. This never fails, including for prefixes that
    /// contain characters outside the alphabet.
    pub fn complete(&self, prefix: &str) -> String {
        let Some(node) = self.find(prefix) else {
            trace!(prefix, "no path for prefix");
            return prefix.to_owned();
        };

        let winner = match node.terminal() {
            Some(exact) if self.policy.prefers_exact_match() => Some(exact),
            _ => best_terminal(node),
        };

        match winner {
            Some(terminal) => {
                trace!(prefix, completion = terminal.value(), "completed prefix");
                terminal.value().to_owned()
            }
            None => prefix.to_owned(),
        }
    }

    /// How many times `word` has been inserted; zero if never.
    pub fn count(&self, word: &str) -> u64 {
        self.find(word)
            .and_then(TrieNode::terminal)
            .map_or(0, Terminal::count)
    }

    /// True if `word` has been inserted at least once.
    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some_and(TrieNode::is_word)
    }

    /// Iterates over every stored `(word, count)` pair in pre-order.
    ///
    /// Children are visited in symbol order, so words come out sorted.
    pub fn entries(&self) -> Entries<'_> {
        Entries {
            stack: smallvec![&self.root],
        }
    }

    fn find(&self, prefix: &str) -> Option<&TrieNode> {
        prefix
            .chars()
            .try_fold(&self.root, |node, ch| node.get_char(ch))
    }
}

/// Prints one `word (count)` line per stored word, in pre-order.
impl fmt::Display for PrefixTrie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (word, count) in self.entries() {
            writeln!(f, "{word} ({count})")?;
        }
        Ok(())
    }
}

/// Pre-order iterator over the words stored in a [`PrefixTrie`].
///
/// Created by [`PrefixTrie::entries`].
#[derive(Clone)]
pub struct Entries<'t> {
    stack: SmallVec<[&'t TrieNode; 32]>,
}

impl<'t> Iterator for Entries<'t> {
    type Item = (&'t str, u64);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            self.stack.extend(node.children().rev().map(|(_, child)| child));
            if let Some(terminal) = node.terminal() {
                return Some((terminal.value(), terminal.count()));
            }
        }
        None
    }
}
