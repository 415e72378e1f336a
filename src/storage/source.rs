//! Lyric input sources
//!
//! Lyrics come from a file or from stdin (`-` or no argument).

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Where lyric text is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LyricSource {
    Stdin,
    File(PathBuf),
}

impl LyricSource {
    /// Interprets a command-line argument; `None` and `-` mean stdin
    pub fn from_arg(arg: Option<&Path>) -> Self {
        match arg {
            None => LyricSource::Stdin,
            Some(path) if path.as_os_str() == "-" => LyricSource::Stdin,
            Some(path) => LyricSource::File(path.to_path_buf()),
        }
    }

    /// Reads the whole source as UTF-8 text
    pub fn read(&self) -> Result<String> {
        match self {
            LyricSource::Stdin => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("Failed to read lyrics from stdin")?;
                Ok(text)
            }
            LyricSource::File(path) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read lyrics: {}", path.display())),
        }
    }

    /// Human-readable name for messages
    pub fn label(&self) -> String {
        match self {
            LyricSource::Stdin => "<stdin>".to_string(),
            LyricSource::File(path) => path.display().to_string(),
        }
    }
}

/// Computes a digest of lyric text for change detection
pub fn content_digest(text: &str) -> blake3::Hash {
    blake3::hash(text.as_bytes())
}
