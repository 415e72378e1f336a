//! Watch command
//!
//! Re-analyzes a lyric file whenever it changes. File events are debounced
//! and a pass is skipped when the content digest has not changed since the
//! last successful analysis.

use std::fs;
use std::io::stdout;
use std::path::Path;
use std::sync::mpsc;

use anyhow::{Context, Result};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use notify::RecursiveMode;
use notify_debouncer_mini::new_debouncer;

use super::analyze::{analyzer, print_analysis, DisplayArgs};
use super::output::Output;
use super::render::RenderStyle;
use crate::analysis::Analyzer;
use crate::hyphen::Hyphenator;
use crate::storage::{content_digest, Config};

/// Remembers the digest of the last analyzed content
#[derive(Debug, Default)]
struct ChangeTracker {
    last: Option<blake3::Hash>,
}

impl ChangeTracker {
    fn is_changed(&self, text: &str) -> bool {
        self.last != Some(content_digest(text))
    }

    fn record(&mut self, text: &str) {
        self.last = Some(content_digest(text));
    }
}

struct WatchSession<'a> {
    output: &'a Output,
    analyzer: Analyzer<Box<dyn Hyphenator>>,
    render: RenderStyle,
    clear: bool,
    tracker: ChangeTracker,
}

impl WatchSession<'_> {
    /// Runs one analysis pass; failures are logged and the session continues
    fn refresh(&mut self, path: &Path) {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                self.output
                    .error(&format!("Failed to read {}: {}", path.display(), e));
                return;
            }
        };

        if !self.tracker.is_changed(&raw) {
            self.output.verbose_ctx("watch", "Content unchanged, skipping");
            return;
        }

        match self.analyzer.analyze(&raw) {
            Ok(analysis) => {
                self.tracker.record(&raw);

                if self.clear && !self.output.is_json() {
                    if let Err(e) = execute!(stdout(), Clear(ClearType::All), MoveTo(0, 0)) {
                        self.output
                            .verbose_ctx("watch", &format!("Failed to clear screen: {}", e));
                    }
                }

                self.output.log(&format!(
                    "Analyzed {} verse(s), {} rhyme group(s)",
                    analysis.verses.len(),
                    analysis.group_count()
                ));
                print_analysis(self.output, &analysis, self.render);
            }
            Err(e) => self.output.error(&format!("Analysis failed: {}", e)),
        }
    }
}

/// Checks whether an event path refers to the watched file
fn is_target(event_path: &Path, target: &Path) -> bool {
    event_path == target
}

pub fn run(
    output: &Output,
    config: &Config,
    file: &Path,
    display: &DisplayArgs,
    clear: bool,
) -> Result<()> {
    let target = file
        .canonicalize()
        .with_context(|| format!("Failed to watch {}", file.display()))?;
    let dir = target
        .parent()
        .with_context(|| format!("No parent directory for {}", target.display()))?
        .to_path_buf();

    let mut session = WatchSession {
        output,
        analyzer: analyzer(output, config, display.mode(config))?,
        render: display.render_style(config),
        clear: clear || config.project.watch.clear_screen,
        tracker: ChangeTracker::default(),
    };

    let (tx, rx) = mpsc::channel();
    let debounce = config.project.watch.debounce();

    let mut debouncer = new_debouncer(debounce, tx).context("Failed to start file watcher")?;
    debouncer
        .watcher()
        .watch(&dir, RecursiveMode::NonRecursive)
        .with_context(|| format!("Failed to watch {}", dir.display()))?;

    output.log(&format!(
        "Watching {} (debounce: {}ms)",
        target.display(),
        debounce.as_millis()
    ));
    session.refresh(&target);

    loop {
        match rx.recv() {
            Ok(Ok(events)) => {
                let changed = events.iter().filter(|e| is_target(&e.path, &target)).count();
                if changed == 0 {
                    continue;
                }

                output.verbose_ctx("watch", &format!("Detected {} change(s)", changed));
                session.refresh(&target);
            }
            Ok(Err(error)) => {
                output.log(&format!("Watch error: {:?}", error));
            }
            Err(e) => {
                output.log(&format!("Channel error: {}", e));
                break;
            }
        }
    }

    Ok(())
}
