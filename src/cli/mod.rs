//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose | Example |
//! |---------|---------|---------|
//! | `analyze` | Rhyme groups of a lyric file | `riimi analyze laulu.txt` |
//! | `classify` | Rhyme type of two syllables | `riimi classify sa ta --all` |
//! | `hyphenate` | Syllable stream of a lyric file | `riimi hyphenate --tree laulu.txt` |
//! | `watch` | Re-analyze on every change | `riimi watch laulu.txt` |
//! | `config` | Inspect configuration | `riimi config show` |
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - Human-readable output, rhymes coloured by group
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output:
//! ```bash
//! riimi --verbose analyze laulu.txt
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod analyze;
mod app;
mod classify;
mod config_cmd;
mod hyphenate;
mod output;
mod render;
mod watch;

pub use analyze::DisplayArgs;
pub use app::{run, Cli, Commands};
pub use output::{Output, OutputFormat};
pub use render::{render_analysis, RenderStyle};
