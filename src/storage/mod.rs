//! # Storage Layer
//!
//! Filesystem access for riimi. Analysis results are never persisted; this
//! layer only reads configuration and lyric text.
//!
//! ## Files
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Project config | TOML | `riimi.toml` in the current directory or an ancestor |
//! | Global config | TOML | `~/.config/riimi/config.toml` (platform config dir) |
//! | Lyrics | UTF-8 text | any file, or stdin |
//!
//! ## Project Config Example
//!
//! ```toml
//! [analysis]
//! every_syllable = false
//!
//! [hyphenator]
//! kind = "command"                  # or "builtin"
//! command = ["python", "Voikko/voikk.py"]
//! input = "argument"                # or "stdin"
//! timeout_seconds = 10
//!
//! [watch]
//! debounce_ms = 2000
//! clear_screen = true
//! ```
//!
//! ## Key Types
//!
//! - [`Config`] - Project and global configuration
//! - [`LyricSource`] - File or stdin input

mod config;
mod source;

pub use config::{
    AnalysisConfig, Config, ConfigError, GlobalConfig, HyphenatorConfig, HyphenatorKind,
    OutputFormat, ProjectConfig, WatchConfig, PROJECT_CONFIG_FILE,
};
pub use source::{content_digest, LyricSource};
