use std::collections::TryReserveError;
use std::error::Error;
use std::fmt;

/// Errors that can occur when inserting into a [`PrefixTrie`](super::PrefixTrie).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TrieError {
    /// The word contained a character outside the printable ASCII range (`' '..='~'`).
    ///
    /// Contains the offending character and its character index within the word.
    /// The trie is left untouched.
    InvalidInput {
        /// The rejected character.
        ch: char,
        /// Character index of `ch` in the word.
        position: usize,
    },
    /// The trie could not grow to hold the word.
    ///
    /// Entries inserted before the failure are unaffected.
    AllocationFailure(TryReserveError),
}

impl fmt::Display for TrieError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrieError::InvalidInput { ch, position } => {
                write!(f, "InvalidInput - {ch:?} at position {position} is not printable ASCII")
            }
            TrieError::AllocationFailure(_) => write!(f, "AllocationFailure - trie could not grow"),
        }
    }
}

impl Error for TrieError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TrieError::InvalidInput { .. } => None,
            TrieError::AllocationFailure(e) => Some(e),
        }
    }
}

impl From<TryReserveError> for TrieError {
    fn from(e: TryReserveError) -> Self {
        TrieError::AllocationFailure(e)
    }
}
