//! Scripted add/complete sequences run against a single trie.
//!
//! A script is a slice of [`Action`]s. [`run_script`] feeds them to one fresh
//! [`PrefixTrie`] in order and checks every completion against its expected
//! answer, which makes it easy to write regression scenarios as plain data:
//!
//! ```
//! use libptrie::ptrie::script::{run_script, Action};
//!
//! let trie = run_script(&[
//!     Action::Complete { query: "", expected: "" },
//!     Action::Add("A"),
//!     Action::Complete { query: "", expected: "A" },
//!     Action::Terminate,
//! ])
//! .unwrap();
//! assert_eq!(trie.len(), 1);
//! ```

use std::error::Error;
use std::fmt;

use tracing::trace;

use super::error::TrieError;
use super::policy::CompletionPolicy;
use super::trie::PrefixTrie;

/// One step of a script.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action<'a> {
    /// Insert a word.
    Add(&'a str),
    /// Complete `query` and require the answer to equal `expected`.
    Complete {
        /// The prefix to complete.
        query: &'a str,
        /// The completion the trie must return.
        expected: &'a str,
    },
    /// Stop. Any actions after this one are ignored.
    Terminate,
}

/// Errors that stop a script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScriptError {
    /// An [`Action::Add`] was rejected by the trie.
    Insert {
        /// Index of the failing action.
        step: usize,
        /// The word that could not be inserted.
        word: String,
        /// Why the insertion failed.
        source: TrieError,
    },
    /// An [`Action::Complete`] returned something other than the expected answer.
    Mismatch {
        /// Index of the failing action.
        step: usize,
        /// The prefix that was completed.
        query: String,
        /// The answer the script expected.
        expected: String,
        /// The answer the trie returned.
        actual: String,
    },
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::Insert { step, word, .. } => {
                write!(f, "step {step}: could not add {word:?}")
            }
            ScriptError::Mismatch {
                step,
                query,
                expected,
                actual,
            } => write!(
                f,
                "step {step}: complete({query:?}) = {actual:?}, expected {expected:?}"
            ),
        }
    }
}

impl Error for ScriptError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ScriptError::Insert { source, .. } => Some(source),
            ScriptError::Mismatch { .. } => None,
        }
    }
}

/// Runs `actions` against a fresh trie with the default policy.
///
/// Returns the trie as it stands when the script ends, either at
/// [`Action::Terminate`] or at the end of the slice.
pub fn run_script(actions: &[Action<'_>]) -> Result<PrefixTrie, ScriptError> {
    run_script_with(CompletionPolicy::default(), actions)
}

/// Runs `actions` against a fresh trie that completes according to `policy`.
pub fn run_script_with(
    policy: CompletionPolicy,
    actions: &[Action<'_>],
) -> Result<PrefixTrie, ScriptError> {
    let mut trie = PrefixTrie::with_policy(policy);
    for (step, action) in actions.iter().enumerate() {
        match *action {
            Action::Add(word) => {
                trace!(step, word, "add");
                trie.insert(word).map_err(|source| ScriptError::Insert {
                    step,
                    word: word.to_owned(),
                    source,
                })?;
            }
            Action::Complete { query, expected } => {
                let actual = trie.complete(query);
                trace!(step, query, actual = actual.as_str(), expected, "complete");
                if actual != expected {
                    return Err(ScriptError::Mismatch {
                        step,
                        query: query.to_owned(),
                        expected: expected.to_owned(),
                        actual,
                    });
                }
            }
            Action::Terminate => {
                trace!(step, "terminate");
                break;
            }
        }
    }
    Ok(trie)
}
