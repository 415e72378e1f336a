//! Built-in Finnish hyphenator
//!
//! Syllabification rules:
//! - A consonant directly before a vowel starts a new syllable (`kis-sa`, `ta-lo`)
//! - Adjacent vowels stay together only as a long vowel (`aa`) or a diphthong
//!   (`ai`, `au`, `äy`, ...); `ie`, `uo` and `yö` only in the first syllable
//! - A syllable nucleus holds at most two vowels (`kau-an`)
//!
//! Characters that are not letters split a word into parts that are
//! hyphenated separately and never appear in the output.

use super::{HyphenateError, Hyphenator};
use crate::domain::{is_vowel, LINE_SEPARATOR, SYLLABLE_SEPARATOR, VERSE_SEPARATOR, WORD_SEPARATOR};

/// Diphthongs allowed in any syllable
const DIPHTHONGS: [&str; 15] = [
    "ai", "ei", "oi", "ui", "yi", "äi", "öi", "au", "eu", "iu", "ou", "ey", "iy", "äy", "öy",
];

/// Diphthongs allowed only in the first syllable of a word
const INITIAL_DIPHTHONGS: [&str; 3] = ["ie", "uo", "yö"];

/// Rule-based Finnish hyphenator
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinHyphenator;

impl Hyphenator for BuiltinHyphenator {
    fn name(&self) -> &str {
        "builtin"
    }

    fn segment(&self, text: &str) -> Result<String, HyphenateError> {
        Ok(encode_structure(text, hyphenate_word))
    }
}

/// Encodes text structure as a delimited stream
///
/// Blank lines separate verses, newlines separate lines and whitespace
/// separates words. Each word is split into syllables by `hyphenate`; words
/// that yield no syllables are skipped.
pub fn encode_structure<F>(text: &str, hyphenate: F) -> String
where
    F: Fn(&str) -> Vec<String>,
{
    let text = text.replace("\r\n", "\n").replace('\r', "\n");

    let mut verses: Vec<String> = Vec::new();
    let mut lines: Vec<String> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !lines.is_empty() {
                verses.push(lines.join(LINE_SEPARATOR.to_string().as_str()));
                lines.clear();
            }
            continue;
        }

        let words: Vec<String> = line
            .split_whitespace()
            .map(|word| hyphenate(word).join(SYLLABLE_SEPARATOR.to_string().as_str()))
            .filter(|word| !word.is_empty())
            .collect();

        if !words.is_empty() {
            lines.push(words.join(WORD_SEPARATOR.to_string().as_str()));
        }
    }

    if !lines.is_empty() {
        verses.push(lines.join(LINE_SEPARATOR.to_string().as_str()));
    }

    verses.join(VERSE_SEPARATOR.to_string().as_str())
}

/// Hyphenates one whitespace-free token, dropping non-letters
fn hyphenate_word(word: &str) -> Vec<String> {
    word.split(|c: char| !c.is_alphabetic())
        .filter(|part| !part.is_empty())
        .flat_map(syllabify)
        .collect()
}

/// Splits a run of letters into syllables, preserving case
pub fn syllabify(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let lower: Vec<char> = chars
        .iter()
        .map(|c| c.to_lowercase().next().unwrap_or(*c))
        .collect();

    let mut syllables: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut nucleus = 0;

    for (i, &c) in lower.iter().enumerate() {
        if nucleus > 0 {
            let boundary = if is_vowel(c) {
                let prev = lower[i - 1];
                is_vowel(prev) && (nucleus >= 2 || !joins(prev, c, syllables.is_empty()))
            } else {
                lower.get(i + 1).is_some_and(|next| is_vowel(*next))
            };

            if boundary {
                syllables.push(std::mem::take(&mut current));
                nucleus = 0;
            }
        }

        current.push(chars[i]);
        if is_vowel(c) {
            nucleus += 1;
        }
    }

    if !current.is_empty() {
        syllables.push(current);
    }

    syllables
}

/// Returns true if two adjacent vowels belong to the same syllable
fn joins(first: char, second: char, initial_syllable: bool) -> bool {
    if first == second {
        return true;
    }

    let pair: String = [first, second].iter().collect();
    DIPHTHONGS.contains(&pair.as_str())
        || (initial_syllable && INITIAL_DIPHTHONGS.contains(&pair.as_str()))
}
