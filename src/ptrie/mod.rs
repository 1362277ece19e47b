/// Bulk construction from word iterators and word files.
pub mod builder;
/// Error type for trie insertion.
pub mod error;
/// Trie node layout: children, terminal payloads and teardown.
pub mod node;
/// Completion policy chosen at construction.
pub mod policy;
/// Data-driven add/complete scripts.
pub mod script;
pub(crate) mod search;
/// The printable ASCII alphabet the trie is built over.
pub mod symbol;
/// The prefix trie itself.
pub mod trie;

pub use error::TrieError;
pub use node::{Terminal, TrieNode};
pub use policy::CompletionPolicy;
pub use symbol::Symbol;
pub use trie::{Entries, PrefixTrie};

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use proptest::prelude::*;

    use super::*;

    /// Brute-force completion over a word -> count table.
    fn oracle(counts: &HashMap<String, u64>, policy: CompletionPolicy, query: &str) -> String {
        if policy.prefers_exact_match() && counts.contains_key(query) {
            return query.to_owned();
        }
        counts
            .iter()
            .filter(|(word, _)| word.starts_with(query))
            .max_by(|(w1, c1), (w2, c2)| c1.cmp(c2).then_with(|| w2.cmp(w1)))
            .map_or_else(|| query.to_owned(), |(word, _)| word.clone())
    }

    fn word() -> impl Strategy<Value = String> {
        // A small alphabet keeps prefixes shared and counts colliding.
        prop_oneof![
            4 => "[ab ]{0,4}",
            1 => "[ -~]{0,6}",
        ]
    }

    fn any_policy() -> impl Strategy<Value = CompletionPolicy> {
        prop_oneof![
            Just(CompletionPolicy::ExactMatchFirst),
            Just(CompletionPolicy::MostFrequent),
        ]
    }

    proptest! {
        #[test]
        fn complete_matches_brute_force(
            policy in any_policy(),
            words in prop::collection::vec(word(), 0..40),
            queries in prop::collection::vec(word(), 1..10),
        ) {
            let mut trie = PrefixTrie::with_policy(policy);
            let mut counts: HashMap<String, u64> = HashMap::new();
            for w in &words {
                trie.insert(w).unwrap();
                *counts.entry(w.clone()).or_default() += 1;
            }
            prop_assert_eq!(trie.len(), counts.len());
            for q in queries.iter().chain(&words) {
                prop_assert_eq!(trie.complete(q), oracle(&counts, policy, q));
            }
        }

        #[test]
        fn completion_extends_query(
            words in prop::collection::vec(word(), 0..30),
            query in "[ -~]{0,4}",
        ) {
            let mut trie = PrefixTrie::new();
            for w in &words {
                trie.insert(w).unwrap();
            }
            let result = trie.complete(&query);
            prop_assert!(result.starts_with(&query));
            if result != query {
                prop_assert!(trie.contains(&result));
            }
        }

        #[test]
        fn inserted_word_completes_to_itself(
            words in prop::collection::vec(word(), 1..30),
            pick in any::<prop::sample::Index>(),
        ) {
            let mut trie = PrefixTrie::new();
            for w in &words {
                trie.insert(w).unwrap();
            }
            let chosen = pick.get(&words);
            prop_assert_eq!(&trie.complete(chosen), chosen);
        }

        #[test]
        fn control_chars_are_rejected(
            head in "[ -~]{0,5}",
            bad in "[\\x00-\\x1f\\x7f]",
            tail in "[ -~]{0,5}",
        ) {
            let mut trie = PrefixTrie::new();
            trie.insert("seed").unwrap();
            let word = format!("{head}{bad}{tail}");
            let err = trie.insert(&word).unwrap_err();
            let is_invalid_at_head = matches!(err, TrieError::InvalidInput { position, .. } if position == head.chars().count());
            prop_assert!(is_invalid_at_head);
            prop_assert_eq!(trie.entries().collect::<Vec<_>>(), vec![("seed", 1)]);
        }

        #[test]
        fn entries_agree_with_counts(words in prop::collection::vec(word(), 0..40)) {
            let mut trie = PrefixTrie::new();
            let mut counts: HashMap<String, u64> = HashMap::new();
            for w in &words {
                trie.insert(w).unwrap();
                *counts.entry(w.clone()).or_default() += 1;
            }
            let mut expected: Vec<(&str, u64)> =
                counts.iter().map(|(w, c)| (w.as_str(), *c)).collect();
            expected.sort();
            let entries: Vec<(&str, u64)> = trie.entries().collect();
            prop_assert_eq!(entries, expected);
        }
    }

    #[test]
    fn frequency_overtakes_competitors() {
        let mut trie = PrefixTrie::new();
        for w in ["apple", "apply", "apply", "apricot"] {
            trie.insert(w).unwrap();
        }
        assert_eq!(trie.complete("ap"), "apply");
        for k in 1..=3 {
            trie.insert("apricot").unwrap();
            let expected = if k < 2 { "apply" } else { "apricot" };
            assert_eq!(trie.complete("ap"), expected, "after {k} extra inserts");
        }
    }

    #[test]
    fn walk_nodes_by_hand() {
        let mut trie = PrefixTrie::new();
        trie.insert("TEST").unwrap();
        trie.insert("TESTER").unwrap();

        let n = trie.root().get_char('T').unwrap();
        assert!(!n.is_word());
        let n = n.get_char('E').unwrap().get_char('S').unwrap().get_char('T').unwrap();
        assert!(n.is_word());
        assert_eq!(n.terminal().map(Terminal::value), Some("TEST"));
        let n = n.get_char('E').unwrap().get_char('R').unwrap();
        assert_eq!(n.terminal().map(Terminal::count), Some(1));
        assert!(n.get_char('S').is_none());
    }
}
