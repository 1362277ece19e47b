use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use super::error::TrieError;
use super::policy::CompletionPolicy;
use super::trie::PrefixTrie;

/// Builds a trie from an iterator of words, using the default policy.
///
/// Words may repeat; each repetition raises that word's count. Unlike a
/// DAWG, no particular input order is required.
///
/// # Errors
///
/// Stops at the first word that cannot be inserted and returns its error.
///
/// # Examples
///
/// ```
/// use libptrie::ptrie::builder::build_trie;
///
/// let trie = build_trie(["test", "testy", "testy", "terminal"]).unwrap();
/// assert_eq!(trie.complete("te"), "testy");
/// assert_eq!(trie.count("testy"), 2);
/// ```
pub fn build_trie<W: AsRef<str>>(words: impl IntoIterator<Item = W>) -> Result<PrefixTrie, TrieError> {
    build_trie_with_policy(CompletionPolicy::default(), words)
}

/// Builds a trie from an iterator of words, completing according to `policy`.
pub fn build_trie_with_policy<W: AsRef<str>>(
    policy: CompletionPolicy,
    words: impl IntoIterator<Item = W>,
) -> Result<PrefixTrie, TrieError> {
    let mut trie = PrefixTrie::with_policy(policy);
    for word in words {
        trie.insert(word.as_ref())?;
    }
    Ok(trie)
}

/// Builds a trie from a word file, one word per line.
///
/// Only the line terminator is stripped, since spaces are part of the alphabet.
/// Empty lines are skipped, as are lines whose first non-whitespace character
/// is `#`. A word that appears on several lines gets a matching count.
///
/// # Examples
///
/// ```no_run
/// use libptrie::ptrie::builder::build_trie_from_file;
///
/// let trie = build_trie_from_file("history.txt").unwrap();
/// println!("{}", trie.complete("git "));
/// ```
pub fn build_trie_from_file(filename: impl AsRef<Path>) -> Result<PrefixTrie, Box<dyn Error>> {
    let filename = filename.as_ref();
    let mut trie = PrefixTrie::new();
    let file = File::open(filename)?;
    let mut reader = BufReader::new(file);

    // Reuse one buffer across lines instead of allocating a String per line.
    let mut buf = String::with_capacity(80);
    let mut line_no = 0usize;
    loop {
        match reader.read_line(&mut buf) {
            Ok(0) => break,
            Err(e) => return Err(e.into()),
            _ => {}
        }
        line_no += 1;
        let word = buf.trim_end_matches(['\n', '\r']);
        if !word.is_empty() && !is_comment(word) {
            trie.insert(word).map_err(|e| {
                debug!(path = %filename.display(), line = line_no, "failed to load word");
                e
            })?;
        }
        buf.clear();
    }
    debug!(path = %filename.display(), words = trie.len(), "loaded word file");
    Ok(trie)
}

/// Returns true if this line is a comment.
pub(crate) fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use itertools::Itertools;

    use super::*;

    #[test]
    fn insertion_order_does_not_matter() {
        const WORDS: [&str; 6] = ["BCB", "BB", "BC", "BCA", "BCA", "A"];
        let expected = build_trie(WORDS).unwrap();
        for order in WORDS.iter().permutations(WORDS.len()) {
            let trie = build_trie(order).unwrap();
            for query in ["", "B", "BC", "BCA", "A", "Z"] {
                assert_eq!(trie.complete(query), expected.complete(query), "{query:?}");
            }
            assert_eq!(trie.entries().collect_vec(), expected.entries().collect_vec());
        }
    }

    #[test]
    fn build_stops_at_invalid_word() {
        let err = build_trie(["ok", "bad\u{0}", "never"]).unwrap_err();
        assert_eq!(err, TrieError::InvalidInput { ch: '\u{0}', position: 3 });
    }

    #[test]
    fn build_with_policy() {
        let words = ["A", "AC", "AC"];
        assert_eq!(build_trie(words).unwrap().complete("A"), "A");
        let trie = build_trie_with_policy(CompletionPolicy::MostFrequent, words).unwrap();
        assert_eq!(trie.complete("A"), "AC");
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "# shell history\ngit status\ngit status\n\ngit stash\r\n  # indented comment\n ls -la \n"
        )
        .unwrap();
        file.flush().unwrap();

        let trie = build_trie_from_file(file.path()).unwrap();
        assert_eq!(trie.len(), 3);
        assert_eq!(trie.count("git status"), 2);
        assert_eq!(trie.count("git stash"), 1);
        assert!(trie.contains(" ls -la "));
        assert_eq!(trie.complete("git st"), "git status");
    }

    #[test]
    fn load_rejects_control_chars() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"fine\nnot\tfine\n").unwrap();
        file.flush().unwrap();

        let err = build_trie_from_file(file.path()).unwrap_err();
        let err = err.downcast::<TrieError>().unwrap();
        assert_eq!(*err, TrieError::InvalidInput { ch: '\t', position: 3 });
    }

    #[test]
    fn load_missing_file() {
        assert!(build_trie_from_file("/nonexistent/words.txt").is_err());
    }

    #[test]
    fn comment_that_starts_with_pound() {
        assert!(is_comment("# This is a comment"));
    }

    #[test]
    fn comment_with_whitespace_before_pound() {
        assert!(is_comment("        # This is a comment with whitespace"));
    }

    #[test]
    fn non_comment() {
        assert!(!is_comment("REVERBERATE"));
        assert!(!is_comment("a # b"));
    }
}
