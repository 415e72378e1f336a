//! Per-verse analysis reports
//!
//! Joins the lyric tree with the rhyme groups of its verse so callers can
//! render lines, words and syllables in order with their group ids.

use serde::Serialize;

use crate::domain::{Line, RhymeGroup, RhymeGroups, SyllableMode, Verse, Word};

/// A syllable and the rhyme group it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyllableReport {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<usize>,
}

/// A word with its syllables
///
/// In last-syllable mode `group` is the group of the final syllable and the
/// syllables carry no groups. In every-syllable mode each syllable carries
/// its own group and `group` is unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordReport {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<usize>,
    pub syllables: Vec<SyllableReport>,
}

/// A line with its syllable count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineReport {
    pub syllable_count: usize,
    pub words: Vec<WordReport>,
}

impl LineReport {
    /// Surface text of the line
    pub fn text(&self) -> String {
        self.words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Analysis result for one verse
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerseAnalysis {
    pub lines: Vec<LineReport>,
    pub groups: Vec<RhymeGroup>,
}

impl VerseAnalysis {
    /// Builds the report for a verse and its rhyme groups
    pub fn new(verse: &Verse, groups: RhymeGroups, mode: SyllableMode) -> Self {
        let lines = verse
            .lines
            .iter()
            .map(|line| line_report(line, &groups, mode))
            .collect();

        Self {
            lines,
            groups: groups.into_groups(),
        }
    }

    pub fn syllable_count(&self) -> usize {
        self.lines.iter().map(|l| l.syllable_count).sum()
    }
}

fn line_report(line: &Line, groups: &RhymeGroups, mode: SyllableMode) -> LineReport {
    LineReport {
        syllable_count: line.syllable_count(),
        words: line
            .words
            .iter()
            .map(|word| word_report(word, groups, mode))
            .collect(),
    }
}

fn word_report(word: &Word, groups: &RhymeGroups, mode: SyllableMode) -> WordReport {
    match mode {
        SyllableMode::LastSyllable => WordReport {
            text: word.text.clone(),
            group: word
                .last_syllable()
                .and_then(|syllable| groups.group_of(&syllable.key())),
            syllables: word
                .syllables
                .iter()
                .map(|s| SyllableReport {
                    text: s.text.clone(),
                    group: None,
                })
                .collect(),
        },
        SyllableMode::EverySyllable => WordReport {
            text: word.text.clone(),
            group: None,
            syllables: word
                .syllables
                .iter()
                .map(|s| SyllableReport {
                    text: s.text.clone(),
                    group: groups.group_of(&s.key()),
                })
                .collect(),
        },
    }
}
