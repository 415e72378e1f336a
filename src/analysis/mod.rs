//! # Analysis
//!
//! One analysis pass turns raw lyrics into rhyme reports:
//!
//! ```text
//! raw text ─clean─▶ Hyphenator ─stream─▶ parse ─Lyrics─▶ per verse: cluster ─▶ Analysis
//! ```
//!
//! Every pass starts from scratch. [`Analyzer`] holds no state between
//! calls, so a scheduler (timer, file watcher, request handler) can call it
//! repeatedly with fresh snapshots. Rhymes are never merged across verses.

mod report;

use serde::Serialize;

use crate::domain::{clean_lyrics, cluster, parse_stream, Lyrics, SyllableMode};
use crate::hyphen::{HyphenateError, Hyphenator};

pub use report::{LineReport, SyllableReport, VerseAnalysis, WordReport};

/// Result of analysing one lyric snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub mode: SyllableMode,
    pub verses: Vec<VerseAnalysis>,
}

impl Analysis {
    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }

    /// Total number of rhyme groups over all verses
    pub fn group_count(&self) -> usize {
        self.verses.iter().map(|v| v.groups.len()).sum()
    }
}

/// Analyses a parsed lyric tree
pub fn analyze_lyrics(lyrics: &Lyrics, mode: SyllableMode) -> Analysis {
    let verses = lyrics
        .verses
        .iter()
        .map(|verse| VerseAnalysis::new(verse, cluster(verse.words(), mode), mode))
        .collect();

    Analysis { mode, verses }
}

/// Parses and analyses a delimited syllable stream
pub fn analyze_stream(stream: &str, mode: SyllableMode) -> Analysis {
    analyze_lyrics(&parse_stream(stream), mode)
}

/// Runs complete analysis passes with an injected hyphenator
#[derive(Debug, Clone)]
pub struct Analyzer<H> {
    hyphenator: H,
    mode: SyllableMode,
}

impl<H: Hyphenator> Analyzer<H> {
    pub fn new(hyphenator: H, mode: SyllableMode) -> Self {
        Self { hyphenator, mode }
    }

    pub fn mode(&self) -> SyllableMode {
        self.mode
    }

    pub fn hyphenator(&self) -> &H {
        &self.hyphenator
    }

    /// Cleans raw lyrics and returns the hyphenator's stream
    pub fn hyphenate(&self, raw: &str) -> Result<String, HyphenateError> {
        self.hyphenator.segment(&clean_lyrics(raw))
    }

    /// Cleans, hyphenates and parses raw lyrics into a lyric tree
    pub fn lyrics(&self, raw: &str) -> Result<Lyrics, HyphenateError> {
        Ok(parse_stream(&self.hyphenate(raw)?))
    }

    /// Runs one full analysis pass
    pub fn analyze(&self, raw: &str) -> Result<Analysis, HyphenateError> {
        Ok(analyze_lyrics(&self.lyrics(raw)?, self.mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hyphen::BuiltinHyphenator;

    struct FixedStream(&'static str);

    impl Hyphenator for FixedStream {
        fn name(&self) -> &str {
            "fixed"
        }

        fn segment(&self, _text: &str) -> Result<String, HyphenateError> {
            Ok(self.0.to_string())
        }
    }

    struct Failing;

    impl Hyphenator for Failing {
        fn name(&self) -> &str {
            "failing"
        }

        fn segment(&self, _text: &str) -> Result<String, HyphenateError> {
            Err(HyphenateError::InvalidOutput {
                program: "failing".to_string(),
            })
        }
    }

    struct Echo;

    impl Hyphenator for Echo {
        fn name(&self) -> &str {
            "echo"
        }

        fn segment(&self, text: &str) -> Result<String, HyphenateError> {
            Ok(text.to_string())
        }
    }

    #[test]
    fn analyzes_fixed_stream() {
        let analyzer = Analyzer::new(
            FixedStream("kis-sa;ka-la,tal-lo.lin-tu;sa-lo"),
            SyllableMode::LastSyllable,
        );
        let analysis = analyzer.analyze("ignored").unwrap();

        assert_eq!(analysis.verses.len(), 2);

        let first = &analysis.verses[0];
        assert_eq!(first.lines.len(), 2);
        assert_eq!(first.lines[0].syllable_count, 4);
        assert_eq!(first.groups.len(), 1);
        assert_eq!(first.lines[0].words[0].group, Some(0));
        assert_eq!(first.lines[0].words[1].group, Some(0));
        assert_eq!(first.lines[1].words[0].group, None);

        // "lo" appears in both verses but groups are per verse
        let second = &analysis.verses[1];
        assert!(second.groups.is_empty());
        assert_eq!(analysis.group_count(), 1);
    }

    #[test]
    fn every_syllable_mode_marks_syllables() {
        let analysis = analyze_stream("ta-lo;ka-la", SyllableMode::EverySyllable);
        let words = &analysis.verses[0].lines[0].words;

        assert_eq!(words[0].group, None);
        assert_eq!(words[0].syllables[0].group, Some(0));
        assert_eq!(words[0].syllables[1].group, None);
        assert_eq!(words[1].syllables[0].group, Some(0));
        assert_eq!(words[1].syllables[1].group, Some(0));
    }

    #[test]
    fn hyphenator_receives_cleaned_text() {
        let analyzer = Analyzer::new(Echo, SyllableMode::LastSyllable);
        assert_eq!(analyzer.hyphenate("kis-sa, koi-ra!").unwrap(), "kis-sa koi-ra");
    }

    #[test]
    fn hyphenator_failure_is_an_error() {
        let analyzer = Analyzer::new(Failing, SyllableMode::LastSyllable);
        assert!(analyzer.analyze("kissa").is_err());
    }

    #[test]
    fn empty_stream_is_empty_analysis() {
        let analysis = analyze_stream("", SyllableMode::LastSyllable);
        assert!(analysis.is_empty());
        assert_eq!(analysis.group_count(), 0);
    }

    #[test]
    fn builtin_end_to_end() {
        let analyzer = Analyzer::new(BuiltinHyphenator, SyllableMode::LastSyllable);
        let analysis = analyzer
            .analyze("Kissa istuu talossa,\nkala uiskelee!\n\nLintu lentää")
            .unwrap();

        assert_eq!(analysis.verses.len(), 2);

        let verse = &analysis.verses[0];
        assert_eq!(verse.lines[0].text(), "Kissa istuu talossa");
        assert_eq!(verse.lines[0].syllable_count, 7);
        assert_eq!(verse.groups.len(), 1);

        let group = &verse.groups[0];
        assert!(group.words.contains("kissa"));
        assert!(group.words.contains("talossa"));
        assert!(group.words.contains("kala"));
    }

    #[test]
    fn analysis_serializes_to_json() {
        let analysis = analyze_stream("kis-sa;ka-la", SyllableMode::LastSyllable);
        let json = serde_json::to_value(&analysis).unwrap();

        assert_eq!(json["mode"], "last_syllable");
        assert_eq!(json["verses"][0]["lines"][0]["syllable_count"], 4);
        assert_eq!(json["verses"][0]["groups"][0]["signature"][0], "la");
    }
}
