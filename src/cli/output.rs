//! Output formatting for CLI commands
//!
//! Results go to stdout; errors, verbose traces and watch progress go to
//! stderr so that `--format json` output stays parseable.

use serde::Serialize;
use serde_json::json;

use crate::storage;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl From<storage::OutputFormat> for OutputFormat {
    fn from(format: storage::OutputFormat) -> Self {
        match format {
            storage::OutputFormat::Text => OutputFormat::Text,
            storage::OutputFormat::Json => OutputFormat::Json,
        }
    }
}

/// Writes command results in the selected format
pub struct Output {
    format: OutputFormat,
    verbose: bool,
}

impl Output {
    pub fn new(format: OutputFormat, verbose: bool) -> Self {
        Self { format, verbose }
    }

    /// Informational result line (`{"success":true,"message":..}` in JSON)
    pub fn success(&self, message: &str) {
        println!("{}", self.status_line(true, message));
    }

    /// Error line on stderr (`{"success":false,"error":..}` in JSON)
    pub fn error(&self, message: &str) {
        eprintln!("{}", self.status_line(false, message));
    }

    fn status_line(&self, ok: bool, message: &str) -> String {
        match (self.format, ok) {
            (OutputFormat::Text, true) => message.to_string(),
            (OutputFormat::Text, false) => format!("Error: {}", message),
            (OutputFormat::Json, true) => json!({ "success": true, "message": message }).to_string(),
            (OutputFormat::Json, false) => json!({ "success": false, "error": message }).to_string(),
        }
    }

    /// Structured data: compact JSON, or pretty JSON for text callers that
    /// have no renderer of their own
    pub fn data<T: Serialize>(&self, data: &T) {
        let rendered = match self.format {
            OutputFormat::Text => serde_json::to_string_pretty(data),
            OutputFormat::Json => serde_json::to_string(data),
        };
        if let Ok(rendered) = rendered {
            println!("{}", rendered);
        }
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Debug trace, only with `--verbose`
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", message);
        }
    }

    /// Debug trace tagged with a context, only with `--verbose`
    pub fn verbose_ctx(&self, context: &str, message: &str) {
        if self.verbose {
            eprintln!("[verbose:{}] {}", context, message);
        }
    }

    /// Timestamped progress line on stderr
    pub fn log(&self, message: &str) {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        eprintln!("[{}] {}", timestamp, message);
    }
}
