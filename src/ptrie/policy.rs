/// How [`PrefixTrie::complete`](super::PrefixTrie::complete) treats a query that
/// is itself a stored word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CompletionPolicy {
    /// A stored word equal to the query is returned as-is, even when longer
    /// words sharing the prefix were inserted more often.
    #[default]
    ExactMatchFirst,
    /// The query's own entry competes with every longer word under the same
    /// ranking: highest count first, then the lexicographically smallest word.
    MostFrequent,
}

impl CompletionPolicy {
    /// True if an exact match short-circuits the subtree search.
    #[inline]
    pub fn prefers_exact_match(self) -> bool {
        matches!(self, CompletionPolicy::ExactMatchFirst)
    }
}
