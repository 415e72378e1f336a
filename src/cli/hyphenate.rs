//! Hyphenate command

use std::path::Path;

use anyhow::{Context, Result};

use super::analyze::analyzer;
use super::output::Output;
use crate::domain::{parse_stream, Lyrics, SYLLABLE_SEPARATOR};
use crate::hyphen::Hyphenator;
use crate::storage::{Config, LyricSource};

pub fn run(output: &Output, config: &Config, file: Option<&Path>, tree: bool) -> Result<()> {
    let source = LyricSource::from_arg(file);
    output.verbose_ctx("hyphenate", &format!("Reading lyrics from {}", source.label()));

    let raw = source.read()?;
    let analyzer = analyzer(output, config, config.project.analysis.mode())?;
    let stream = analyzer
        .hyphenate(&raw)
        .with_context(|| format!("Failed to hyphenate {}", source.label()))?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "hyphenator": analyzer.hyphenator().name(),
            "stream": stream,
            "lyrics": parse_stream(&stream),
        }));
    } else if tree {
        println!("{}", render_tree(&parse_stream(&stream)));
    } else {
        println!("{}", stream);
    }

    Ok(())
}

/// Renders a lyric tree with one indented line per lyric line
fn render_tree(lyrics: &Lyrics) -> String {
    let separator = SYLLABLE_SEPARATOR.to_string();
    let mut out = Vec::new();

    for (i, verse) in lyrics.verses.iter().enumerate() {
        out.push(format!("Verse {} [{}]", i + 1, verse.syllable_count()));
        for line in &verse.lines {
            let words: Vec<String> = line
                .words
                .iter()
                .map(|w| {
                    w.syllables
                        .iter()
                        .map(|s| s.text.as_str())
                        .collect::<Vec<_>>()
                        .join(separator.as_str())
                })
                .collect();
            out.push(format!("  [{}] {}", line.syllable_count(), words.join(" ")));
        }
    }

    out.join("\n")
}
