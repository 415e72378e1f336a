//! Text rendering of analysis results
//!
//! Rhyming words (or syllables) are coloured by group using a fixed 24-bit
//! palette. Foreground mode colours the text itself with the light palette;
//! background mode paints the dark palette behind white text. Without colour
//! each rhyming part is followed by its 1-based group number, `kissa(1)`.

use crossterm::style::{style, Color, Stylize};

use crate::analysis::{Analysis, LineReport, VerseAnalysis, WordReport};
use crate::domain::{RhymeGroup, SyllableMode};

const DARK_PALETTE: [(u8, u8, u8); 22] = [
    (0, 125, 181),
    (255, 0, 246),
    (255, 0, 86),
    (181, 0, 255),
    (0, 118, 255),
    (120, 130, 49),
    (107, 104, 130),
    (229, 111, 254),
    (164, 36, 0),
    (0, 100, 1),
    (0, 143, 156),
    (232, 94, 190),
    (0, 185, 23),
    (106, 130, 108),
    (255, 110, 65),
    (255, 0, 0),
    (38, 52, 0),
    (0, 0, 255),
    (98, 14, 0),
    (0, 21, 68),
    (67, 0, 44),
    (1, 0, 103),
];

const LIGHT_PALETTE: [(u8, u8, u8); 26] = [
    (0, 155, 255),
    (0, 174, 126),
    (254, 137, 0),
    (95, 173, 78),
    (255, 116, 163),
    (0, 255, 0),
    (194, 140, 159),
    (0, 255, 120),
    (213, 255, 0),
    (255, 229, 2),
    (152, 255, 82),
    (255, 147, 126),
    (190, 153, 112),
    (255, 166, 254),
    (255, 177, 103),
    (144, 251, 146),
    (0, 255, 198),
    (222, 255, 116),
    (1, 208, 255),
    (255, 219, 102),
    (1, 255, 254),
    (165, 255, 210),
    (189, 211, 147),
    (189, 198, 255),
    (145, 208, 203),
    (255, 238, 232),
];

/// How rhyme groups are marked in text output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderStyle {
    pub color: bool,
    pub background: bool,
}

impl RenderStyle {
    pub fn plain() -> Self {
        Self::default()
    }

    /// Palette colour for a group id; the palette wraps around
    pub fn group_color(&self, id: usize) -> Color {
        let (r, g, b) = if self.background {
            DARK_PALETTE[id % DARK_PALETTE.len()]
        } else {
            LIGHT_PALETTE[id % LIGHT_PALETTE.len()]
        };
        Color::Rgb { r, g, b }
    }

    fn paint(&self, text: &str, group: Option<usize>) -> String {
        match group {
            None => text.to_string(),
            Some(id) if !self.color => format!("{}({})", text, id + 1),
            Some(id) if self.background => style(text)
                .with(Color::White)
                .on(self.group_color(id))
                .to_string(),
            Some(id) => style(text).with(self.group_color(id)).to_string(),
        }
    }
}

/// Renders a word with its group marks
pub fn render_word(word: &WordReport, mode: SyllableMode, render: RenderStyle) -> String {
    match mode {
        SyllableMode::LastSyllable => render.paint(&word.text, word.group),
        SyllableMode::EverySyllable => {
            let parts: Vec<String> = word
                .syllables
                .iter()
                .map(|s| render.paint(&s.text, s.group))
                .collect();
            if render.color {
                parts.concat()
            } else {
                parts.join("-")
            }
        }
    }
}

/// Renders a line as `[n] words...`
pub fn render_line(line: &LineReport, mode: SyllableMode, render: RenderStyle) -> String {
    let words: Vec<String> = line
        .words
        .iter()
        .map(|w| render_word(w, mode, render))
        .collect();
    format!("[{}] {}", line.syllable_count, words.join(" "))
}

/// Renders one group as `(n) signature: words`
pub fn render_group(group: &RhymeGroup, render: RenderStyle) -> String {
    let label = format!("({})", group.id + 1);
    let label = if render.color {
        render.paint(&label, Some(group.id))
    } else {
        label
    };
    let words: Vec<&str> = group.words.iter().map(String::as_str).collect();
    format!("{} {}: {}", label, group.signature_label(), words.join(", "))
}

fn render_verse(verse: &VerseAnalysis, mode: SyllableMode, render: RenderStyle) -> Vec<String> {
    let mut out: Vec<String> = verse
        .lines
        .iter()
        .map(|l| render_line(l, mode, render))
        .collect();

    if !verse.groups.is_empty() {
        out.push(String::new());
        for group in &verse.groups {
            out.push(format!("  {}", render_group(group, render)));
        }
    }
    out
}

/// Renders a whole analysis, verses separated by a blank line
pub fn render_analysis(analysis: &Analysis, render: RenderStyle) -> String {
    analysis
        .verses
        .iter()
        .map(|v| render_verse(v, analysis.mode, render).join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze_stream;

    #[test]
    fn plain_last_syllable() {
        let analysis = analyze_stream("kis-sa;ka-la,tal-lo", SyllableMode::LastSyllable);
        let text = render_analysis(&analysis, RenderStyle::plain());

        assert_eq!(text, "[4] kissa(1) kala(1)\n[2] tallo\n\n  (1) la, sa: kala, kissa");
    }

    #[test]
    fn plain_every_syllable() {
        let analysis = analyze_stream("ta-lo;ka-la", SyllableMode::EverySyllable);
        let line = render_line(&analysis.verses[0].lines[0], analysis.mode, RenderStyle::plain());

        assert_eq!(line, "[4] ta(1)-lo ka(1)-la(1)");
    }

    #[test]
    fn verses_are_separated() {
        let analysis = analyze_stream("kis-sa.koi-ra", SyllableMode::LastSyllable);
        let text = render_analysis(&analysis, RenderStyle::plain());

        assert_eq!(text, "[2] kissa\n\n[2] koira");
    }

    #[test]
    fn colored_output_keeps_text() {
        let analysis = analyze_stream("kis-sa;ka-la", SyllableMode::LastSyllable);
        let render = RenderStyle {
            color: true,
            background: false,
        };
        let line = render_line(&analysis.verses[0].lines[0], analysis.mode, render);

        assert!(line.contains("kissa"));
        assert!(line.contains('\u{1b}'));
        assert!(!line.contains("(1)"));
    }

    #[test]
    fn palettes_wrap() {
        let fg = RenderStyle {
            color: true,
            background: false,
        };
        let bg = RenderStyle {
            color: true,
            background: true,
        };

        assert_eq!(fg.group_color(0), fg.group_color(LIGHT_PALETTE.len()));
        assert_eq!(bg.group_color(1), bg.group_color(DARK_PALETTE.len() + 1));
        assert_ne!(fg.group_color(0), bg.group_color(0));
    }
}
