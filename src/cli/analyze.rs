//! Analyze command

use std::io::IsTerminal;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use super::output::Output;
use super::render::{render_analysis, RenderStyle};
use crate::analysis::{Analysis, Analyzer, VerseAnalysis};
use crate::domain::SyllableMode;
use crate::hyphen::Hyphenator;
use crate::storage::{Config, LyricSource};

/// Display options shared by `analyze` and `watch`
#[derive(Args, Debug, Clone, Default)]
pub struct DisplayArgs {
    /// Mark rhymes of every syllable, not only the last one of each word
    #[arg(long, short = 'a')]
    pub all_syllables: bool,

    /// Mark rhymes with group numbers instead of colours
    #[arg(long)]
    pub no_color: bool,

    /// Colour the background instead of the text
    #[arg(long)]
    pub background: bool,
}

impl DisplayArgs {
    pub fn mode(&self, config: &Config) -> SyllableMode {
        if self.all_syllables {
            SyllableMode::EverySyllable
        } else {
            config.project.analysis.mode()
        }
    }

    pub fn render_style(&self, config: &Config) -> RenderStyle {
        RenderStyle {
            color: !self.no_color && config.global.color && std::io::stdout().is_terminal(),
            background: self.background || config.global.background,
        }
    }
}

/// Builds an analyzer from the configured hyphenator
pub fn analyzer(
    output: &Output,
    config: &Config,
    mode: SyllableMode,
) -> Result<Analyzer<Box<dyn Hyphenator>>> {
    let hyphenator = config
        .project
        .hyphenator
        .build()
        .context("Failed to set up hyphenator")?;

    output.verbose_ctx(
        "hyphenate",
        &format!("Using {} hyphenator, mode {}", hyphenator.name(), mode.as_str()),
    );

    Ok(Analyzer::new(hyphenator, mode))
}

pub fn run(output: &Output, config: &Config, file: Option<&Path>, display: &DisplayArgs) -> Result<()> {
    let source = LyricSource::from_arg(file);
    output.verbose_ctx("analyze", &format!("Reading lyrics from {}", source.label()));

    let raw = source.read()?;
    let analyzer = analyzer(output, config, display.mode(config))?;
    let analysis = analyzer
        .analyze(&raw)
        .with_context(|| format!("Failed to analyze {}", source.label()))?;

    output.verbose_ctx(
        "analyze",
        &format!(
            "{} verse(s), {} syllable(s), {} rhyme group(s)",
            analysis.verses.len(),
            analysis
                .verses
                .iter()
                .map(VerseAnalysis::syllable_count)
                .sum::<usize>(),
            analysis.group_count()
        ),
    );

    print_analysis(output, &analysis, display.render_style(config));
    Ok(())
}

/// Prints an analysis in the selected output format
pub fn print_analysis(output: &Output, analysis: &Analysis, render: RenderStyle) {
    if output.is_json() {
        output.data(analysis);
    } else if analysis.is_empty() {
        output.success("No lyrics to analyze");
    } else {
        println!("{}", render_analysis(analysis, render));
    }
}
