//! # Hyphenation
//!
//! Splits raw lyric text into syllables and encodes the result as a flat,
//! delimited string that [`crate::domain::parse_stream`] turns into a lyric tree.
//!
//! ## Stream Format
//!
//! | Level | Separator | Source |
//! |-------|-----------|--------|
//! | Verse | `.` | blank line |
//! | Line | `,` | newline |
//! | Word | `;` | whitespace |
//! | Syllable | `-` | hyphenation |
//!
//! Example: `"kissa koira\njuoksee\n\nhaukkuu"` → `kis-sa;koi-ra,juok-see.hauk-kuu`
//!
//! ## Implementations
//!
//! - [`BuiltinHyphenator`] - Rule-based Finnish syllabification, no external tools
//! - [`CommandHyphenator`] - Runs an external program (e.g. a Voikko script)
//!
//! ```text
//! riimi                        Hyphenator process
//!  │                               │
//!  ├── Spawn: python voikk.py <text>
//!  │                               │
//!  └── Stdout: kis-sa;koi-ra.lin-tu
//! ```
//!
//! Failures are returned as [`HyphenateError`], never mixed into the stream.

mod builtin;
mod command;

use std::io;
use std::time::Duration;

use thiserror::Error;

pub use builtin::{encode_structure, syllabify, BuiltinHyphenator};
pub use command::{CommandHyphenator, TextInput};

#[derive(Debug, Error)]
pub enum HyphenateError {
    #[error("Failed to spawn hyphenator '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Hyphenator I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("Hyphenator '{program}' exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("Hyphenator '{program}' timed out after {timeout:?}")]
    Timeout { program: String, timeout: Duration },

    #[error("Hyphenator '{program}' produced non-UTF-8 output")]
    InvalidOutput { program: String },
}

/// Capability that turns cleaned lyric text into a delimited syllable stream
pub trait Hyphenator {
    /// Short name used in diagnostics
    fn name(&self) -> &str;

    /// Segments text into the verse/line/word/syllable stream
    fn segment(&self, text: &str) -> Result<String, HyphenateError>;
}

impl<H: Hyphenator + ?Sized> Hyphenator for Box<H> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn segment(&self, text: &str) -> Result<String, HyphenateError> {
        (**self).segment(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boxed_hyphenator_delegates() {
        let hyphenator: Box<dyn Hyphenator> = Box::new(BuiltinHyphenator);

        assert_eq!(hyphenator.name(), "builtin");
        assert_eq!(hyphenator.segment("kissa").unwrap(), "kis-sa");
    }

    #[test]
    fn error_messages() {
        let err = HyphenateError::Failed {
            program: "python".to_string(),
            status: "exit status: 1".to_string(),
            stderr: "No module named libvoikko".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Hyphenator 'python' exited with exit status: 1: No module named libvoikko"
        );

        let err = HyphenateError::Timeout {
            program: "python".to_string(),
            timeout: Duration::from_secs(2),
        };
        assert!(err.to_string().contains("timed out after 2s"));
    }
}
