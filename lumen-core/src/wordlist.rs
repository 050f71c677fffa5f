//! Wordlist lookups for mnemonic phrase generation.
//!
//! Each supported language provides a fixed table of 2048 words; a word's
//! position in the table is its 11-bit value in the mnemonic bit stream.
//! The tables come from the `bip39` crate, which embeds the standard
//! per-language lists.

pub use bip39::Language;

/// Number of words in every language table.
pub const WORDLIST_LEN: usize = 2048;

/// Bits encoded by a single word (log2 of [`WORDLIST_LEN`]).
pub const BITS_PER_WORD: usize = 11;

/// Look up the word at an 11-bit index.
///
/// Returns `None` if `index` is outside the 2048-word table.
#[must_use]
pub fn word_at(language: Language, index: u16) -> Option<&'static str> {
    language.word_list().get(usize::from(index)).copied()
}

/// Reverse lookup: the 11-bit index of `word` in the language's table.
///
/// Returns `None` if the word is not present. The match is exact; callers
/// are expected to lowercase and trim user input first.
#[must_use]
pub fn index_of(language: Language, word: &str) -> Option<u16> {
    language
        .word_list()
        .iter()
        .position(|candidate| *candidate == word)
        .map(|index| index as u16)
}
