//! Delimited-text parser
//!
//! Hyphenation output encodes the lyric tree with four separators:
//!
//! | Level | Separator |
//! |-------|-----------|
//! | Verse | `.` |
//! | Line | `,` |
//! | Word | `;` |
//! | Syllable | `-` |
//!
//! Empty segments collapse, so doubled or trailing separators never produce
//! empty nodes. Malformed input yields an empty tree rather than an error.

use super::lyrics::{Line, Lyrics, Syllable, Verse, Word};

pub const VERSE_SEPARATOR: char = '.';
pub const LINE_SEPARATOR: char = ',';
pub const WORD_SEPARATOR: char = ';';
pub const SYLLABLE_SEPARATOR: char = '-';

/// Strips punctuation that collides with the line separator
///
/// Applied to raw lyrics before they are handed to a hyphenator.
pub fn clean_lyrics(raw: &str) -> String {
    raw.replace([',', '!'], "")
}

/// Parses a delimited syllable stream into a lyric tree
pub fn parse_stream(stream: &str) -> Lyrics {
    let verses = segments(stream, VERSE_SEPARATOR)
        .map(parse_verse)
        .filter(|verse| !verse.lines.is_empty())
        .collect();

    Lyrics::new(verses)
}

fn parse_verse(verse: &str) -> Verse {
    let lines = segments(verse, LINE_SEPARATOR)
        .map(parse_line)
        .filter(|line| !line.words.is_empty())
        .collect();

    Verse::new(lines)
}

fn parse_line(line: &str) -> Line {
    let words = segments(line, WORD_SEPARATOR).filter_map(parse_word).collect();
    Line::new(words)
}

/// Returns None for words without any non-empty syllable
fn parse_word(word: &str) -> Option<Word> {
    let syllables: Vec<Syllable> = segments(word, SYLLABLE_SEPARATOR)
        .map(Syllable::new)
        .collect();

    if syllables.is_empty() {
        return None;
    }

    let text: String = syllables.iter().map(|s| s.text.as_str()).collect();
    Some(Word::new(text, syllables))
}

/// Splits on `separator`, trimming whitespace and dropping empty entries
fn segments(text: &str, separator: char) -> impl Iterator<Item = &str> {
    text.split(separator)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
}
