use std::cmp::Ordering;
use std::collections::TryReserveError;
use std::mem;
use std::slice;

use super::symbol::Symbol;

/// The payload of a node where some inserted word ends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Terminal {
    value: String,
    count: u64,
}

impl Terminal {
    /// Creates a terminal for `word` with a count of one.
    ///
    /// The word is copied into storage reserved fallibly, so the trie never
    /// aborts on a failed allocation here.
    pub(crate) fn try_new(word: &str) -> Result<Self, TryReserveError> {
        let mut value = String::new();
        value.try_reserve_exact(word.len())?;
        value.push_str(word);
        Ok(Terminal { value, count: 1 })
    }

    /// The stored word, equal to the path spelled from the root to this node.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// How many times the word has been inserted.
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    pub(crate) fn bump(&mut self) {
        self.count += 1;
    }

    /// Compares two terminals as completion candidates.
    ///
    /// `Greater` means `self` is the better completion: a higher count wins,
    /// and on equal counts the lexicographically smaller word wins.
    pub fn rank(&self, other: &Terminal) -> Ordering {
        self.count
            .cmp(&other.count)
            .then_with(|| other.value.cmp(&self.value))
    }
}

/// The children of a [`TrieNode`], kept sorted by symbol.
///
/// Empty children do not allocate. A node has at most [`Symbol::COUNT`] children.
#[derive(Debug, Default)]
pub struct Children {
    entries: Vec<(Symbol, TrieNode)>,
}

impl Children {
    #[inline]
    fn position(&self, symbol: Symbol) -> Result<usize, usize> {
        self.entries.binary_search_by_key(&symbol, |&(s, _)| s)
    }

    /// Returns the child along `symbol`'s edge, if any.
    #[inline]
    pub fn get(&self, symbol: Symbol) -> Option<&TrieNode> {
        self.position(symbol).ok().map(|pos| &self.entries[pos].1)
    }

    /// Returns the child along `symbol`'s edge, creating an empty one if needed.
    pub(crate) fn get_or_try_insert(
        &mut self,
        symbol: Symbol,
    ) -> Result<&mut TrieNode, TryReserveError> {
        let pos = match self.position(symbol) {
            Ok(pos) => pos,
            Err(pos) => {
                self.entries.try_reserve(1)?;
                self.entries.insert(pos, (symbol, TrieNode::default()));
                pos
            }
        };
        Ok(&mut self.entries[pos].1)
    }

    /// Number of children.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if there are no children.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Moves every child out, leaving this set empty.
    fn take_nodes(&mut self) -> impl Iterator<Item = TrieNode> {
        mem::take(&mut self.entries).into_iter().map(|(_, node)| node)
    }
}

/// An iterator over the children of a [`TrieNode`], in symbol order.
#[derive(Clone)]
pub struct ChildIter<'t> {
    inner: slice::Iter<'t, (Symbol, TrieNode)>,
}

impl<'t> Iterator for ChildIter<'t> {
    type Item = (Symbol, &'t TrieNode);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(s, n)| (*s, n))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for ChildIter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(s, n)| (*s, n))
    }
}

impl ExactSizeIterator for ChildIter<'_> {}

/// A node in the prefix trie. Each node stands for the prefix spelled by the
/// path from the root, and exclusively owns its children.
#[derive(Debug, Default)]
pub struct TrieNode {
    children: Children,
    terminal: Option<Terminal>,
}

impl TrieNode {
    /// Creates a node with no children and no terminal.
    pub fn new() -> Self {
        TrieNode::default()
    }

    /// Returns the node that `symbol`'s edge leads to, or None if no such edge exists.
    #[inline]
    pub fn get(&self, symbol: Symbol) -> Option<&TrieNode> {
        self.children.get(symbol)
    }

    /// Follows the edge for `ch`. Characters outside the alphabet have no edge.
    #[inline]
    pub fn get_char(&self, ch: char) -> Option<&TrieNode> {
        Symbol::from_char(ch).and_then(|symbol| self.get(symbol))
    }

    pub(crate) fn child_or_try_insert(
        &mut self,
        symbol: Symbol,
    ) -> Result<&mut TrieNode, TryReserveError> {
        self.children.get_or_try_insert(symbol)
    }

    /// The terminal payload, present iff an inserted word ends at this node.
    #[inline]
    pub fn terminal(&self) -> Option<&Terminal> {
        self.terminal.as_ref()
    }

    pub(crate) fn terminal_mut(&mut self) -> &mut Option<Terminal> {
        &mut self.terminal
    }

    /// True if an inserted word ends at this node.
    #[inline]
    pub fn is_word(&self) -> bool {
        self.terminal.is_some()
    }

    /// Returns an iterator over all children of this node.
    #[inline]
    pub fn children(&self) -> ChildIter<'_> {
        ChildIter {
            inner: self.children.entries.iter(),
        }
    }

    /// Returns the number of children.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

// Dropping a long chain of nodes recursively would use one stack frame per
// character, so the subtree is flattened onto a heap stack instead. Every node
// popped from `pending` has already lost its children and drops trivially.
impl Drop for TrieNode {
    fn drop(&mut self) {
        if self.children.is_empty() {
            return;
        }
        let mut pending: Vec<TrieNode> = self.children.take_nodes().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.take_nodes());
        }
    }
}
