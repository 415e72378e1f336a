//! Riimi - rhyme analysis for Finnish song lyrics
//!
//! Lyrics are hyphenated into syllables, parsed into verses, lines and
//! words, and the final syllables of each verse are clustered into rhyme
//! groups. Rhyme classification follows Finnish phonetics (perfect, vowel,
//! consonant and suppressed/extended rhymes).

pub mod analysis;
pub mod cli;
pub mod domain;
pub mod hyphen;
pub mod storage;

pub use analysis::{analyze_stream, Analysis, Analyzer};
pub use domain::{classify, cluster, parse_stream, Lyrics, RhymeGroups, RhymeType, SyllableMode};
pub use hyphen::{BuiltinHyphenator, CommandHyphenator, HyphenateError, Hyphenator};
