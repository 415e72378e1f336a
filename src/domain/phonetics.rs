//! Finnish vowel/consonant alphabet
//!
//! Only the fixed Finnish vowel set is recognised. Every other letter counts
//! as a consonant; non-letters are ignored.

/// Vowels of the Finnish alphabet
pub const VOWELS: &str = "aeiouyäö";

/// Returns true if `c` is a (lower-case) Finnish vowel
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}

/// Splits text into its vowel and consonant subsequences
///
/// The text is case-folded first. Order is preserved and non-letters are
/// discarded.
pub fn split_vowels_consonants(text: &str) -> (String, String) {
    let mut vowels = String::new();
    let mut consonants = String::new();

    for c in text.to_lowercase().chars() {
        if is_vowel(c) {
            vowels.push(c);
        } else if c.is_alphabetic() {
            consonants.push(c);
        }
    }

    (vowels, consonants)
}
