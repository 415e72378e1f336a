//! Domain models for riimi
//!
//! Contains the lyric model and the rhyme algorithms, without any I/O concerns.

mod cluster;
mod lyrics;
mod parse;
mod phonetics;
mod rhyme;

pub use cluster::{cluster, RhymeGraph, RhymeGroup, RhymeGroups, SyllableMode};
pub use lyrics::{Line, Lyrics, Syllable, Verse, Word};
pub use parse::{
    clean_lyrics, parse_stream, LINE_SEPARATOR, SYLLABLE_SEPARATOR, VERSE_SEPARATOR,
    WORD_SEPARATOR,
};
pub use phonetics::{is_vowel, split_vowels_consonants, VOWELS};
pub use rhyme::{
    classify, is_consonant_rhyme, is_perfect, is_suppressed_or_extended, is_vowel_rhyme,
    matching_rules, RhymeType,
};
