//! Mnemonic phrase codec and seed derivation.
//!
//! A mnemonic encodes entropy plus a hash-derived checksum as a sequence of
//! wordlist words:
//!
//! 1. **Encoding**: entropy (128-256 bits, multiple of 32) is hashed with
//!    SHA-256; the first `entropy_bits / 32` bits of the hash are appended
//!    as a checksum; the combined bit stream is split into 11-bit groups,
//!    each indexing the active language's wordlist.
//! 2. **Decoding**: the inverse mapping, re-deriving the checksum from the
//!    recovered entropy and rejecting any mismatch.
//! 3. **Seed derivation**: PBKDF2-HMAC-SHA512 with 2048 rounds over the
//!    phrase, salted with `"mnemonic" + passphrase`, producing the 64-byte
//!    seed that hierarchical key derivation consumes.
//!
//! The wordlists are ASCII, so NFKD normalization of the phrase is the
//! identity; passphrases are used as provided.
//!
//! # Prefix expansion
//!
//! The wordlists are designed so that every word is uniquely identifiable
//! by its first 4 characters. [`expand`] resolves abbreviated user input
//! ("aban" -> "abandon") before parsing.

use hmac::Hmac;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256, Sha512};
use zeroize::{Zeroize, Zeroizing, ZeroizeOnDrop};

use crate::error::{Error, Result};
use crate::wordlist::{self, Language, BITS_PER_WORD};

/// Valid entropy lengths in bytes (128-256 bits in 32-bit steps).
pub const ENTROPY_LENGTHS: [usize; 5] = [16, 20, 24, 28, 32];

/// Default generation strength: 24 words (256-bit entropy).
pub const DEFAULT_WORD_COUNT: usize = 24;

/// PBKDF2 round count for seed stretching.
const PBKDF2_ROUNDS: u32 = 2048;

/// Fixed prefix of the seed-stretching salt.
const SALT_PREFIX: &[u8] = b"mnemonic";

/// Minimum prefix length required for unambiguous word expansion.
const MIN_PREFIX_LEN: usize = 4;

// ---------------------------------------------------------------------------
// Mnemonic
// ---------------------------------------------------------------------------

/// A checksummed mnemonic phrase.
///
/// Holds the whitespace-normalized phrase and the language it was encoded
/// with. The phrase is zeroized on drop; the type deliberately implements
/// neither `Clone` nor `Debug` so the words cannot leak through implicit
/// copies or log output.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Mnemonic {
    phrase: String,
    #[zeroize(skip)]
    language: Language,
}

impl Mnemonic {
    /// Generate a new English mnemonic at the default 24-word strength.
    ///
    /// Entropy comes from the OS-level CSPRNG.
    ///
    /// # Errors
    ///
    /// Returns an error only if the wordlist mapping fails, which cannot
    /// happen for freshly generated entropy of a valid length.
    pub fn generate() -> Result<Self> {
        Self::generate_in(Language::English, DEFAULT_WORD_COUNT)
    }

    /// Generate a new English mnemonic with an explicit word count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWordCount`] unless `word_count` is 12, 15,
    /// 18, 21, or 24.
    pub fn generate_with(word_count: usize) -> Result<Self> {
        Self::generate_in(Language::English, word_count)
    }

    /// Generate a new mnemonic in the given language.
    ///
    /// See [`Mnemonic::generate_with`] for details.
    pub fn generate_in(language: Language, word_count: usize) -> Result<Self> {
        if !matches!(word_count, 12 | 15 | 18 | 21 | 24) {
            return Err(Error::InvalidWordCount(word_count));
        }

        // 11 bits per word, of which 1/33 of the total stream is checksum:
        // every 3 words carry exactly 4 bytes of entropy.
        let entropy_len = word_count / 3 * 4;
        let mut entropy = Zeroizing::new(vec![0u8; entropy_len]);
        OsRng.fill_bytes(entropy.as_mut_slice());

        Self::from_entropy_in(language, &entropy)
    }

    /// Encode raw entropy as an English mnemonic.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEntropy`] unless the length is one of
    /// 16, 20, 24, 28, or 32 bytes.
    pub fn from_entropy(entropy: &[u8]) -> Result<Self> {
        Self::from_entropy_in(Language::English, entropy)
    }

    /// Encode raw entropy as a mnemonic in the given language.
    ///
    /// See [`Mnemonic::from_entropy`] for details.
    pub fn from_entropy_in(language: Language, entropy: &[u8]) -> Result<Self> {
        let phrase = encode_entropy(language, entropy)?;
        Ok(Self { phrase, language })
    }

    /// Parse and validate an English phrase.
    ///
    /// The input is tokenized on whitespace and fully validated: word
    /// count, wordlist membership, and checksum. The stored phrase is the
    /// whitespace-normalized join of the tokens.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidWordCount`], [`Error::UnknownWord`], or
    /// [`Error::InvalidChecksum`].
    pub fn parse(phrase: &str) -> Result<Self> {
        Self::parse_in(Language::English, phrase)
    }

    /// Parse and validate a phrase in the given language.
    ///
    /// See [`Mnemonic::parse`] for details.
    pub fn parse_in(language: Language, phrase: &str) -> Result<Self> {
        // Decoding performs every validation step; the entropy itself is
        // discarded here.
        decode_phrase(language, phrase)?;
        Ok(Self {
            phrase: split_words(phrase).join(" "),
            language,
        })
    }

    /// The whitespace-normalized phrase.
    #[must_use]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// The individual words of the phrase.
    #[must_use]
    pub fn words(&self) -> Vec<&str> {
        split_words(&self.phrase)
    }

    /// Number of words in the phrase.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words().len()
    }

    /// The language this mnemonic was encoded with.
    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    /// Decode the phrase back into the exact entropy it was created from.
    ///
    /// # Errors
    ///
    /// The same failures as [`Mnemonic::parse`]; a value constructed
    /// through this crate's constructors always decodes successfully.
    pub fn to_entropy(&self) -> Result<Zeroizing<Vec<u8>>> {
        decode_phrase(self.language, &self.phrase)
    }

    /// Stretch the phrase into a 64-byte seed.
    ///
    /// PBKDF2-HMAC-SHA512, 2048 rounds, password = the phrase bytes,
    /// salt = `"mnemonic" + passphrase`. Deterministic: the same phrase
    /// and passphrase always produce the same seed. Use `""` for no
    /// passphrase.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyStretching`] if the PBKDF2 computation fails.
    pub fn to_seed(&self, passphrase: &str) -> Result<Seed> {
        let mut salt = Zeroizing::new(Vec::with_capacity(SALT_PREFIX.len() + passphrase.len()));
        salt.extend_from_slice(SALT_PREFIX);
        salt.extend_from_slice(passphrase.as_bytes());

        let mut output = Zeroizing::new([0u8; Seed::LEN]);
        pbkdf2::pbkdf2::<Hmac<Sha512>>(
            self.phrase.as_bytes(),
            &salt,
            PBKDF2_ROUNDS,
            output.as_mut(),
        )
        .map_err(|_| Error::KeyStretching)?;

        Ok(Seed(*output))
    }
}

// ---------------------------------------------------------------------------
// Seed
// ---------------------------------------------------------------------------

/// A 64-byte seed stretched from a mnemonic.
///
/// The root input to hierarchical key derivation. Zeroized on drop, and
/// deliberately neither `Clone` nor `Debug`.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Seed([u8; 64]);

impl Seed {
    /// Fixed byte length of a seed.
    pub const LEN: usize = 64;

    /// Reconstruct a seed from raw bytes (stored data or test vectors).
    #[must_use]
    pub fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    /// The raw 64 bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Tokenizing
// ---------------------------------------------------------------------------

/// Split text into whitespace-separated words.
///
/// Callers use the token count to classify user input: 24 tokens look like
/// a mnemonic, anything else is treated as a raw key.
#[must_use]
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

// ---------------------------------------------------------------------------
// Codec internals
// ---------------------------------------------------------------------------

/// Entropy -> phrase: checksum, bit regrouping, wordlist mapping.
fn encode_entropy(language: Language, entropy: &[u8]) -> Result<String> {
    if !ENTROPY_LENGTHS.contains(&entropy.len()) {
        return Err(Error::InvalidEntropy(entropy.len()));
    }

    let entropy_bits = entropy.len() * 8;
    let checksum_bits = entropy_bits / 32;
    let checksum = Sha256::digest(entropy);

    let mut bits = Vec::with_capacity(entropy_bits + checksum_bits);
    for byte in entropy {
        for shift in (0..8).rev() {
            bits.push((byte >> shift) & 1);
        }
    }
    for position in 0..checksum_bits {
        bits.push((checksum[position / 8] >> (7 - position % 8)) & 1);
    }

    // entropy_bits + checksum_bits is always a multiple of 11 for the
    // five valid lengths, so every chunk is a full 11-bit index < 2048.
    let word_list = language.word_list();
    let mut words = Vec::with_capacity(bits.len() / BITS_PER_WORD);
    for chunk in bits.chunks(BITS_PER_WORD) {
        let mut index = 0usize;
        for bit in chunk {
            index = (index << 1) | usize::from(*bit);
        }
        debug_assert!(index < word_list.len());
        words.push(word_list[index]);
    }

    bits.zeroize();
    Ok(words.join(" "))
}

/// Phrase -> entropy: wordlist reverse lookup, checksum verification.
fn decode_phrase(language: Language, phrase: &str) -> Result<Zeroizing<Vec<u8>>> {
    let words = split_words(phrase);
    if !matches!(words.len(), 12 | 15 | 18 | 21 | 24) {
        return Err(Error::InvalidWordCount(words.len()));
    }

    let total_bits = words.len() * BITS_PER_WORD;
    let checksum_bits = total_bits / 33;
    let entropy_bits = total_bits - checksum_bits;

    let mut bits = Vec::with_capacity(total_bits);
    for word in &words {
        let index = wordlist::index_of(language, word)
            .ok_or_else(|| Error::UnknownWord((*word).to_string()))?;
        for shift in (0..BITS_PER_WORD).rev() {
            bits.push(((index >> shift) & 1) as u8);
        }
    }

    let mut entropy = Zeroizing::new(vec![0u8; entropy_bits / 8]);
    for (position, bit) in bits[..entropy_bits].iter().enumerate() {
        if *bit == 1 {
            entropy[position / 8] |= 1 << (7 - position % 8);
        }
    }

    let checksum = Sha256::digest(entropy.as_slice());
    let mut matches = true;
    for (position, bit) in bits[entropy_bits..].iter().enumerate() {
        let expected = (checksum[position / 8] >> (7 - position % 8)) & 1;
        if *bit != expected {
            matches = false;
        }
    }

    bits.zeroize();
    if !matches {
        return Err(Error::InvalidChecksum);
    }
    Ok(entropy)
}

// ---------------------------------------------------------------------------
// Prefix expansion
// ---------------------------------------------------------------------------

/// Expand abbreviated words in an English phrase to their full form.
///
/// Each whitespace-separated token is matched against the wordlist:
/// - An exact match is kept as-is.
/// - A prefix of at least 4 characters that identifies a single word is
///   expanded to that word.
/// - Anything else is an error.
///
/// # Errors
///
/// [`Error::PrefixTooShort`], [`Error::UnknownPrefix`], or
/// [`Error::AmbiguousPrefix`].
pub fn expand(phrase: &str) -> Result<String> {
    expand_in(Language::English, phrase)
}

/// Expand abbreviated words using the specified language's wordlist.
///
/// See [`expand`] for details.
pub fn expand_in(language: Language, phrase: &str) -> Result<String> {
    let word_list = language.word_list();
    let mut result = String::new();
    for (position, token) in split_words(phrase).iter().enumerate() {
        let word = resolve_token(word_list, token)?;
        if position > 0 {
            result.push(' ');
        }
        result.push_str(word);
    }
    Ok(result)
}

/// Resolve a single token against the wordlist: exact match or unique prefix.
fn resolve_token<'a>(word_list: &'a [&'a str; 2048], token: &str) -> Result<&'a str> {
    // Fast path: exact match via binary search (the lists are sorted).
    if let Ok(position) = word_list.binary_search(&token) {
        return Ok(word_list[position]);
    }

    if token.len() < MIN_PREFIX_LEN {
        return Err(Error::PrefixTooShort {
            prefix: token.to_string(),
            min_len: MIN_PREFIX_LEN,
        });
    }

    let matches: Vec<&str> = word_list
        .iter()
        .copied()
        .filter(|word| word.starts_with(token))
        .collect();

    match matches.len() {
        0 => Err(Error::UnknownPrefix(token.to_string())),
        1 => Ok(matches[0]),
        _ => Err(Error::AmbiguousPrefix {
            prefix: token.to_string(),
            candidates: matches.iter().map(|word| (*word).to_string()).collect(),
        }),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use hex_literal::hex;

    const ABANDON_12: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
    const ABANDON_24: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon art";

    mod codec {
        use super::*;

        #[test]
        fn zero_entropy_16_bytes() {
            let mnemonic = Mnemonic::from_entropy(&[0u8; 16]).unwrap();
            assert_eq!(mnemonic.phrase(), ABANDON_12);
        }

        #[test]
        fn zero_entropy_32_bytes() {
            let mnemonic = Mnemonic::from_entropy(&[0u8; 32]).unwrap();
            assert_eq!(mnemonic.phrase(), ABANDON_24);
        }

        #[test]
        fn entropy_all_7f() {
            let mnemonic = Mnemonic::from_entropy(&[0x7Fu8; 32]).unwrap();
            let expected = "legal winner thank year wave sausage worth useful \
                            legal winner thank year wave sausage worth useful \
                            legal winner thank year wave sausage worth title";
            assert_eq!(mnemonic.phrase(), expected);
        }

        #[test]
        fn entropy_all_ff() {
            let mnemonic = Mnemonic::from_entropy(&[0xFFu8; 32]).unwrap();
            let words = mnemonic.words();
            for word in &words[..23] {
                assert_eq!(*word, "zoo");
            }
            assert_eq!(words[23], "vote");
        }

        #[test]
        fn round_trip_all_valid_lengths() {
            for len in ENTROPY_LENGTHS {
                let entropy: Vec<u8> = (0..len).map(|byte| byte as u8).collect();
                let mnemonic = Mnemonic::from_entropy(&entropy).unwrap();
                let recovered = mnemonic.to_entropy().unwrap();
                assert_eq!(recovered.as_slice(), entropy.as_slice(), "length {len}");
            }
        }

        #[test]
        fn invalid_entropy_lengths_rejected() {
            for len in [0usize, 15, 17, 31, 33, 64] {
                let entropy = vec![0u8; len];
                assert_eq!(
                    Mnemonic::from_entropy(&entropy).err(),
                    Some(Error::InvalidEntropy(len)),
                    "length {len}"
                );
            }
        }

        #[test]
        fn parse_accepts_valid_phrase() {
            let mnemonic = Mnemonic::parse(ABANDON_24).unwrap();
            assert_eq!(mnemonic.word_count(), 24);
        }

        #[test]
        fn parse_normalizes_whitespace() {
            let messy = "  abandon\tabandon abandon abandon abandon abandon abandon abandon \
                         abandon abandon\n abandon about ";
            let mnemonic = Mnemonic::parse(messy).unwrap();
            assert_eq!(mnemonic.phrase(), ABANDON_12);
        }

        #[test]
        fn parse_rejects_wrong_word_count() {
            assert_eq!(
                Mnemonic::parse("abandon abandon abandon").err(),
                Some(Error::InvalidWordCount(3))
            );
        }

        #[test]
        fn parse_rejects_unknown_word() {
            let mut words = vec!["abandon"; 24];
            words[5] = "notaword";
            let phrase = words.join(" ");
            assert_eq!(
                Mnemonic::parse(&phrase).err(),
                Some(Error::UnknownWord("notaword".to_string()))
            );
        }

        #[test]
        fn parse_rejects_bad_checksum() {
            // 24 x "abandon": the checksum word should be "art".
            let phrase = vec!["abandon"; 24].join(" ");
            assert_eq!(Mnemonic::parse(&phrase).err(), Some(Error::InvalidChecksum));
        }

        #[test]
        fn flipping_any_checksum_bit_fails_decode() {
            // The final word of a 24-word phrase carries 3 entropy bits and
            // all 8 checksum bits. Flipping a checksum bit leaves the
            // recovered entropy unchanged, so the recomputed checksum can
            // never match the stored one.
            let art = wordlist::index_of(Language::English, "art").unwrap();
            for bit in 0..8u16 {
                let corrupted_word = wordlist::word_at(Language::English, art ^ (1 << bit)).unwrap();
                let mut words = vec!["abandon"; 23];
                words.push(corrupted_word);
                let phrase = words.join(" ");
                assert_eq!(
                    Mnemonic::parse(&phrase).err(),
                    Some(Error::InvalidChecksum),
                    "checksum bit {bit}"
                );
            }
        }
    }

    mod generation {
        use super::*;

        #[test]
        fn default_strength_is_24_words() {
            let mnemonic = Mnemonic::generate().unwrap();
            assert_eq!(mnemonic.word_count(), DEFAULT_WORD_COUNT);
        }

        #[test]
        fn generated_phrase_validates() {
            let mnemonic = Mnemonic::generate().unwrap();
            assert!(Mnemonic::parse(mnemonic.phrase()).is_ok());
        }

        #[test]
        fn explicit_word_counts() {
            for count in [12usize, 15, 18, 21, 24] {
                let mnemonic = Mnemonic::generate_with(count).unwrap();
                assert_eq!(mnemonic.word_count(), count);
            }
        }

        #[test]
        fn invalid_word_count_rejected() {
            assert_eq!(
                Mnemonic::generate_with(13).err(),
                Some(Error::InvalidWordCount(13))
            );
        }

        #[test]
        fn two_generations_differ() {
            let first = Mnemonic::generate().unwrap();
            let second = Mnemonic::generate().unwrap();
            assert_ne!(first.phrase(), second.phrase());
        }
    }

    mod seed {
        use super::*;

        /// Interoperability vector: 24-word phrase with empty passphrase.
        #[test]
        fn published_seed_vector() {
            let mnemonic = Mnemonic::parse(
                "bench hurt jump file august wise shallow faculty impulse spring exact slush \
                 thunder author capable act festival slice deposit sauce coconut afford frown better",
            )
            .unwrap();
            let seed = mnemonic.to_seed("").unwrap();
            assert_eq!(
                seed.as_bytes(),
                &hex!(
                    "937ae91f6ab6f12461d9936dfc1375ea5312d097f3f1eb6fed6a82fbe38c8582"
                    "4da8704389831482db0433e5f6c6c9700ff1946aa75ad8cc2654d6e40f567866"
                )
            );
        }

        /// Trezor vector: all-zero entropy with passphrase "TREZOR".
        #[test]
        fn trezor_seed_vector() {
            let mnemonic = Mnemonic::parse(ABANDON_24).unwrap();
            let seed = mnemonic.to_seed("TREZOR").unwrap();
            assert_eq!(
                seed.as_bytes(),
                &hex!(
                    "bda85446c68413707090a52022edd26a1c9462295029f2e60cd7c4f2bbd30971"
                    "70af7a4d73245cafa9c3cca8d561a7c3de6f5d4a10be8ed2a5e608d68f92fcc8"
                )
            );
        }

        #[test]
        fn seed_is_deterministic() {
            let mnemonic = Mnemonic::parse(ABANDON_24).unwrap();
            let first = mnemonic.to_seed("pass").unwrap();
            let second = mnemonic.to_seed("pass").unwrap();
            assert_eq!(first.as_bytes(), second.as_bytes());
        }

        #[test]
        fn passphrase_changes_seed() {
            let mnemonic = Mnemonic::parse(ABANDON_24).unwrap();
            let plain = mnemonic.to_seed("").unwrap();
            let salted = mnemonic.to_seed("TREZOR").unwrap();
            assert_ne!(plain.as_bytes(), salted.as_bytes());
        }
    }

    mod tokenizing {
        use super::*;

        #[test]
        fn splits_on_any_whitespace() {
            assert_eq!(split_words("a  b\tc\nd"), vec!["a", "b", "c", "d"]);
        }

        #[test]
        fn empty_input_yields_no_words() {
            assert!(split_words("").is_empty());
            assert!(split_words("   ").is_empty());
        }

        #[test]
        fn mnemonic_length_input_classifies() {
            assert_eq!(split_words(ABANDON_24).len(), 24);
        }
    }

    mod expansion {
        use super::*;

        #[test]
        fn full_words_unchanged() {
            assert_eq!(expand(ABANDON_12).unwrap(), ABANDON_12);
        }

        #[test]
        fn four_letter_prefixes_expand() {
            let abbreviated = "aban aban aban aban aban aban aban aban aban aban aban abou";
            assert_eq!(expand(abbreviated).unwrap(), ABANDON_12);
        }

        #[test]
        fn mixed_full_and_abbreviated() {
            let input = "abil acti addr admi wall wris";
            assert_eq!(expand(input).unwrap(), "ability action address admit wall wrist");
        }

        #[test]
        fn short_exact_words_accepted() {
            assert_eq!(expand("zoo art ice").unwrap(), "zoo art ice");
        }

        #[test]
        fn prefix_too_short_rejected() {
            assert!(matches!(
                expand("aba aba aba"),
                Err(Error::PrefixTooShort { .. })
            ));
        }

        #[test]
        fn unknown_prefix_rejected() {
            assert!(matches!(expand("zzzz"), Err(Error::UnknownPrefix(_))));
        }
    }
}
