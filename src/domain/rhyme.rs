//! Rhyme classification
//!
//! Decides how two syllables rhyme. Rules are checked in priority order and
//! the first match wins:
//!
//! 1. [`RhymeType::Perfect`] - same ending from the first vowel, different onset
//! 2. [`RhymeType::VowelRhyme`] - identical vowel sequence
//! 3. [`RhymeType::ConsonantRhyme`] - identical consonant sequence, same vowel count
//! 4. [`RhymeType::SuppressedOrExtended`] - same stem, exactly one ends in `n`
//! 5. [`RhymeType::None`]
//!
//! Every function here is pure and total: malformed syllables (no vowels,
//! empty strings) simply fail the rules they cannot satisfy.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::phonetics::{is_vowel, split_vowels_consonants};

/// How two syllables rhyme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RhymeType {
    Perfect,
    VowelRhyme,
    ConsonantRhyme,
    SuppressedOrExtended,
    None,
}

impl RhymeType {
    /// Returns a display label for the rhyme type
    pub fn label(&self) -> &'static str {
        match self {
            RhymeType::Perfect => "perfect",
            RhymeType::VowelRhyme => "vowel",
            RhymeType::ConsonantRhyme => "consonant",
            RhymeType::SuppressedOrExtended => "suppressed/extended",
            RhymeType::None => "none",
        }
    }

    /// Returns true for every type except [`RhymeType::None`]
    pub fn is_rhyme(&self) -> bool {
        !matches!(self, RhymeType::None)
    }
}

impl fmt::Display for RhymeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Vowel/consonant decomposition of one syllable
struct Parts<'a> {
    text: &'a str,
    vowels: String,
    consonants: String,
}

impl<'a> Parts<'a> {
    fn new(text: &'a str) -> Self {
        let (vowels, consonants) = split_vowels_consonants(text);
        Self {
            text,
            vowels,
            consonants,
        }
    }

    fn vowel_count(&self) -> usize {
        self.vowels.chars().count()
    }
}

/// Classifies two syllables, returning the highest-priority matching rule
pub fn classify(a: &str, b: &str) -> RhymeType {
    let (a, b) = (Parts::new(a), Parts::new(b));

    if perfect(a.text, b.text) {
        RhymeType::Perfect
    } else if vowel_rhyme(&a, &b) {
        RhymeType::VowelRhyme
    } else if consonant_rhyme(&a, &b) {
        RhymeType::ConsonantRhyme
    } else if suppressed_or_extended(&a, &b) {
        RhymeType::SuppressedOrExtended
    } else {
        RhymeType::None
    }
}

/// Lists every rule that holds for the pair, in priority order
///
/// Returns `[RhymeType::None]` when nothing matches. The first element is
/// always equal to [`classify`].
pub fn matching_rules(a: &str, b: &str) -> Vec<RhymeType> {
    let (sa, sb) = (Parts::new(a), Parts::new(b));

    let checks = [
        (RhymeType::Perfect, perfect(a, b)),
        (RhymeType::VowelRhyme, vowel_rhyme(&sa, &sb)),
        (RhymeType::ConsonantRhyme, consonant_rhyme(&sa, &sb)),
        (RhymeType::SuppressedOrExtended, suppressed_or_extended(&sa, &sb)),
    ];

    let matched: Vec<_> = checks
        .into_iter()
        .filter(|(_, holds)| *holds)
        .map(|(rhyme, _)| rhyme)
        .collect();

    if matched.is_empty() {
        vec![RhymeType::None]
    } else {
        matched
    }
}

/// Same text from the first vowel onwards, but a different onset
///
/// Two syllables with identical onsets (including identical syllables) are
/// not perfect rhymes.
pub fn is_perfect(a: &str, b: &str) -> bool {
    perfect(a, b)
}

/// Identical vowel subsequences
pub fn is_vowel_rhyme(a: &str, b: &str) -> bool {
    vowel_rhyme(&Parts::new(a), &Parts::new(b))
}

/// Identical consonant subsequences and equal vowel counts
pub fn is_consonant_rhyme(a: &str, b: &str) -> bool {
    consonant_rhyme(&Parts::new(a), &Parts::new(b))
}

/// Equal vowel counts, identical text minus the final character, and
/// exactly one of the two ending in `n`
pub fn is_suppressed_or_extended(a: &str, b: &str) -> bool {
    suppressed_or_extended(&Parts::new(a), &Parts::new(b))
}

fn perfect(a: &str, b: &str) -> bool {
    let (Some(index_a), Some(index_b)) = (a.find(is_vowel), b.find(is_vowel)) else {
        return false;
    };

    let (onset_a, rime_a) = a.split_at(index_a);
    let (onset_b, rime_b) = b.split_at(index_b);

    if rime_a != rime_b {
        return false;
    }

    onset_a.to_lowercase() != onset_b.to_lowercase()
}

fn vowel_rhyme(a: &Parts<'_>, b: &Parts<'_>) -> bool {
    a.vowels == b.vowels
}

fn consonant_rhyme(a: &Parts<'_>, b: &Parts<'_>) -> bool {
    a.consonants == b.consonants && a.vowel_count() == b.vowel_count()
}

fn suppressed_or_extended(a: &Parts<'_>, b: &Parts<'_>) -> bool {
    if a.vowel_count() != b.vowel_count() {
        return false;
    }

    // A one-character syllable has an empty stem and never matches
    let (Some(stem_a), Some(stem_b)) = (stem(a.text), stem(b.text)) else {
        return false;
    };

    stem_a == stem_b && ends_with_n(a.text) != ends_with_n(b.text)
}

/// Text without its final character, or None if that leaves nothing
fn stem(text: &str) -> Option<&str> {
    let (last_index, _) = text.char_indices().last()?;
    let stem = &text[..last_index];
    (!stem.is_empty()).then_some(stem)
}

fn ends_with_n(text: &str) -> bool {
    text.chars()
        .last()
        .is_some_and(|c| c.eq_ignore_ascii_case(&'n'))
}
