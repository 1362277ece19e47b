use std::fmt;

use smallvec::SmallVec;

use super::error::TrieError;

/// One member of the trie alphabet: the printable ASCII characters `' '..='~'`.
///
/// A symbol is stored as its offset from `' '`, so it doubles as an index into
/// a 95-slot table. Ordering of symbols matches the character-code ordering of
/// the characters they stand for.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u8);

impl Symbol {
    /// The first character of the alphabet.
    pub const FIRST: char = ' ';
    /// The last character of the alphabet.
    pub const LAST: char = '~';
    /// Number of symbols in the alphabet.
    pub const COUNT: usize = (Self::LAST as usize) - (Self::FIRST as usize) + 1;

    /// Maps a character to its symbol, or `None` if it lies outside the alphabet.
    #[inline]
    pub fn from_char(ch: char) -> Option<Symbol> {
        (Self::FIRST..=Self::LAST)
            .contains(&ch)
            .then(|| Symbol(ch as u8 - Self::FIRST as u8))
    }

    /// Offset of this symbol within the alphabet, in `0..Symbol::COUNT`.
    #[inline]
    pub fn offset(self) -> usize {
        self.0 as usize
    }

    /// The character this symbol stands for.
    #[inline]
    pub fn to_char(self) -> char {
        char::from(self.0 + Self::FIRST as u8)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_char())
    }
}

impl TryFrom<char> for Symbol {
    type Error = TrieError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Symbol::from_char(ch).ok_or(TrieError::InvalidInput { ch, position: 0 })
    }
}

/// Converts a whole word into symbols.
///
/// Characters are checked in order and the first one outside the alphabet
/// aborts the conversion; its character index is reported in the error.
pub fn symbols(word: &str) -> Result<SmallVec<[Symbol; 32]>, TrieError> {
    word.chars()
        .enumerate()
        .map(|(position, ch)| Symbol::from_char(ch).ok_or(TrieError::InvalidInput { ch, position }))
        .collect()
}
