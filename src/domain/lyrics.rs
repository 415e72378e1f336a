//! Lyric model
//!
//! An immutable tree: [`Lyrics`] → [`Verse`] → [`Line`] → [`Word`] → [`Syllable`].
//! A fresh tree is built on every analysis pass; nothing here is mutated
//! after construction.

use serde::{Deserialize, Serialize};

/// A single syllable produced by hyphenation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Syllable {
    /// Syllable text as hyphenated
    pub text: String,
}

impl Syllable {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Rhyme clustering key: the letters of the syllable, case-folded
    ///
    /// Punctuation passed through by a hyphenator is dropped, so `lo?`
    /// and `lo` share a key. A syllable without letters has an empty key.
    pub fn key(&self) -> String {
        self.text
            .chars()
            .filter(|c| c.is_alphabetic())
            .flat_map(char::to_lowercase)
            .collect()
    }
}

/// A word and its syllables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// Surface form with syllable markers removed
    pub text: String,

    /// Syllables in order
    #[serde(default)]
    pub syllables: Vec<Syllable>,
}

impl Word {
    /// Creates a word. An empty syllable list is accepted as-is.
    pub fn new(text: impl Into<String>, syllables: Vec<Syllable>) -> Self {
        Self {
            text: text.into(),
            syllables,
        }
    }

    pub fn syllable_count(&self) -> usize {
        self.syllables.len()
    }

    pub fn last_syllable(&self) -> Option<&Syllable> {
        self.syllables.last()
    }
}

/// A line of words, in order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub words: Vec<Word>,
}

impl Line {
    pub fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Sum of the syllable counts of every word on the line
    pub fn syllable_count(&self) -> usize {
        self.words.iter().map(Word::syllable_count).sum()
    }
}

/// A verse: the scope of rhyme grouping
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    pub lines: Vec<Line>,
}

impl Verse {
    pub fn new(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    /// All words of the verse in line order
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.lines.iter().flat_map(|line| line.words.iter())
    }

    pub fn syllable_count(&self) -> usize {
        self.lines.iter().map(Line::syllable_count).sum()
    }
}

/// Root of the lyric model
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lyrics {
    pub verses: Vec<Verse>,
}

impl Lyrics {
    pub fn new(verses: Vec<Verse>) -> Self {
        Self { verses }
    }

    /// All words across every verse
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.verses.iter().flat_map(Verse::words)
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str, syllables: &[&str]) -> Word {
        Word::new(text, syllables.iter().map(|s| Syllable::new(*s)).collect())
    }

    #[test]
    fn syllable_key_is_lower_case() {
        assert_eq!(Syllable::new("KiS").key(), "kis");
        assert_eq!(Syllable::new("Ää").key(), "ää");
    }

    #[test]
    fn syllable_key_drops_punctuation() {
        assert_eq!(Syllable::new("lo?").key(), "lo");
        assert_eq!(Syllable::new("\"Sa'").key(), "sa");
        assert_eq!(Syllable::new("?!").key(), "");
    }

    #[test]
    fn word_syllable_count() {
        let w = word("kissa", &["kis", "sa"]);
        assert_eq!(w.syllable_count(), 2);
        assert_eq!(w.last_syllable().map(|s| s.text.as_str()), Some("sa"));
    }

    #[test]
    fn word_accepts_empty_syllables() {
        let w = Word::new("", Vec::new());
        assert_eq!(w.syllable_count(), 0);
        assert!(w.last_syllable().is_none());
    }

    #[test]
    fn line_syllable_count_sums_words() {
        let line = Line::new(vec![
            word("kissa", &["kis", "sa"]),
            word("juoksee", &["juok", "see"]),
            word("ja", &["ja"]),
        ]);
        assert_eq!(line.syllable_count(), 5);
        assert_eq!(Line::default().syllable_count(), 0);
    }

    #[test]
    fn verse_words_in_line_order() {
        let verse = Verse::new(vec![
            Line::new(vec![word("yksi", &["yk", "si"])]),
            Line::new(vec![word("kaksi", &["kak", "si"]), word("kolme", &["kol", "me"])]),
        ]);

        let texts: Vec<_> = verse.words().map(|w| w.text.as_str()).collect();
        assert_eq!(texts, vec!["yksi", "kaksi", "kolme"]);
        assert_eq!(verse.syllable_count(), 6);
    }

    #[test]
    fn lyrics_words_across_verses() {
        let lyrics = Lyrics::new(vec![
            Verse::new(vec![Line::new(vec![word("a", &["a"])])]),
            Verse::new(vec![Line::new(vec![word("b", &["b"])])]),
        ]);
        assert_eq!(lyrics.words().count(), 2);
        assert!(!lyrics.is_empty());
        assert!(Lyrics::default().is_empty());
    }
}
