//! Configuration handling for riimi
//!
//! Configuration is stored in `riimi.toml` (project, found by walking up from
//! the current directory) and `~/.config/riimi/config.toml` (global).

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::SyllableMode;
use crate::hyphen::{BuiltinHyphenator, CommandHyphenator, Hyphenator, TextInput};

/// File name of the project configuration
pub const PROJECT_CONFIG_FILE: &str = "riimi.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Which hyphenator to use
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HyphenatorKind {
    /// Built-in Finnish rules
    #[default]
    Builtin,
    /// External program
    Command,
}

impl HyphenatorKind {
    pub fn as_str(&self) -> &str {
        match self {
            HyphenatorKind::Builtin => "builtin",
            HyphenatorKind::Command => "command",
        }
    }
}

/// Configuration for hyphenation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HyphenatorConfig {
    /// Hyphenator implementation
    pub kind: HyphenatorKind,

    /// Program and leading arguments (command kind only)
    pub command: Vec<String>,

    /// How the text is passed to the program
    pub input: TextInput,

    /// Seconds before the program is killed
    pub timeout_seconds: u64,
}

impl Default for HyphenatorConfig {
    fn default() -> Self {
        Self {
            kind: HyphenatorKind::Builtin,
            command: vec![],
            input: TextInput::Argument,
            timeout_seconds: 10,
        }
    }
}

impl HyphenatorConfig {
    /// Builds the configured hyphenator
    pub fn build(&self) -> Result<Box<dyn Hyphenator>, ConfigError> {
        match self.kind {
            HyphenatorKind::Builtin => Ok(Box::new(BuiltinHyphenator)),
            HyphenatorKind::Command => {
                let (program, args) = self.command.split_first().ok_or_else(|| {
                    ConfigError::Invalid(
                        "hyphenator.command must name a program when kind = \"command\"".to_string(),
                    )
                })?;

                if self.timeout_seconds == 0 {
                    return Err(ConfigError::Invalid(
                        "hyphenator.timeout_seconds must be greater than zero".to_string(),
                    ));
                }

                Ok(Box::new(
                    CommandHyphenator::new(program.clone())
                        .with_args(args.iter().cloned())
                        .with_input(self.input)
                        .with_timeout(Duration::from_secs(self.timeout_seconds)),
                ))
            }
        }
    }
}

/// Configuration for rhyme analysis
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Cluster every syllable instead of only the last one
    pub every_syllable: bool,
}

impl AnalysisConfig {
    pub fn mode(&self) -> SyllableMode {
        SyllableMode::from_every_syllable(self.every_syllable)
    }
}

/// Configuration for watch mode
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WatchConfig {
    /// Debounce delay in milliseconds before re-analysing
    pub debounce_ms: u64,

    /// Clear the terminal before each report
    pub clear_screen: bool,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 2000,
            clear_screen: false,
        }
    }
}

impl WatchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Project-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ProjectConfig {
    /// Analysis settings
    pub analysis: AnalysisConfig,

    /// Hyphenator settings
    pub hyphenator: HyphenatorConfig,

    /// Watch settings
    pub watch: WatchConfig,
}

/// Global user configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GlobalConfig {
    /// Default output format (text or json)
    pub default_format: OutputFormat,

    /// Colour rhyme groups in text output
    pub color: bool,

    /// Colour the background instead of the text
    pub background: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            color: true,
            background: false,
        }
    }
}

/// Output format for commands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Combined configuration (global + project)
#[derive(Debug, Clone, Default, Serialize)]
pub struct Config {
    pub project: ProjectConfig,
    pub global: GlobalConfig,

    /// Project configuration file, if one was found
    pub project_file: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from default locations
    pub fn load() -> Result<Self> {
        let global = Self::load_global()?;
        let project_file = std::env::current_dir()
            .ok()
            .and_then(|dir| Self::find_project_config(&dir));

        let project = match &project_file {
            Some(path) => Self::load_project_config(path)?,
            None => ProjectConfig::default(),
        };

        Ok(Self {
            project,
            global,
            project_file,
        })
    }

    /// Loads configuration with an explicit project file
    pub fn with_project_file(path: &Path) -> Result<Self> {
        let global = Self::load_global()?;

        if !path.is_file() {
            anyhow::bail!("Config file not found: {}", path.display());
        }
        let project = Self::load_project_config(path)?;

        Ok(Self {
            project,
            global,
            project_file: Some(path.to_path_buf()),
        })
    }

    /// Returns the global config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "riimi", "riimi").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        Self::global_config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Loads global configuration
    fn load_global() -> Result<GlobalConfig> {
        let config_path = match Self::global_config_path() {
            Some(path) => path,
            None => return Ok(GlobalConfig::default()),
        };

        if !config_path.exists() {
            return Ok(GlobalConfig::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read global config: {}", config_path.display()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .context("Failed to parse global config")
    }

    /// Loads project configuration from a file
    fn load_project_config(config_path: &Path) -> Result<ProjectConfig> {
        let content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read project config: {}", config_path.display()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .with_context(|| format!("Failed to parse project config: {}", config_path.display()))
    }

    /// Finds `riimi.toml` in `start` or any of its ancestors
    pub fn find_project_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            let candidate = current.join(PROJECT_CONFIG_FILE);
            if candidate.is_file() {
                return Some(candidate);
            }

            if !current.pop() {
                return None;
            }
        }
    }

    /// Renders the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        #[derive(Serialize)]
        struct Effective<'a> {
            global: &'a GlobalConfig,
            project: &'a ProjectConfig,
        }

        toml::to_string_pretty(&Effective {
            global: &self.global,
            project: &self.project,
        })
        .context("Failed to serialize configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();

        assert_eq!(config.project.analysis.mode(), SyllableMode::LastSyllable);
        assert_eq!(config.project.hyphenator.kind, HyphenatorKind::Builtin);
        assert_eq!(config.project.watch.debounce(), Duration::from_secs(2));
        assert_eq!(config.global.default_format, OutputFormat::Text);
        assert!(config.global.color);
        assert!(config.project_file.is_none());
    }

    #[test]
    fn parse_project_config() {
        let toml = r#"
[analysis]
every_syllable = true

[hyphenator]
kind = "command"
command = ["python", "voikk.py"]
input = "stdin"

[watch]
debounce_ms = 500
"#;

        let config: ProjectConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.analysis.mode(), SyllableMode::EverySyllable);
        assert_eq!(config.hyphenator.kind, HyphenatorKind::Command);
        assert_eq!(config.hyphenator.command, vec!["python", "voikk.py"]);
        assert_eq!(config.hyphenator.input, TextInput::Stdin);
        assert_eq!(config.hyphenator.timeout_seconds, 10);
        assert_eq!(config.watch.debounce_ms, 500);
        assert!(!config.watch.clear_screen);
    }

    #[test]
    fn parse_global_config() {
        let toml = r#"
default_format = "json"
color = false
"#;

        let config: GlobalConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.default_format, OutputFormat::Json);
        assert!(!config.color);
        assert!(!config.background);
    }

    #[test]
    fn unknown_kind_fails_to_parse() {
        let result: Result<ProjectConfig, _> = toml::from_str("[hyphenator]\nkind = \"voikko\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn find_project_config_walks_up() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(PROJECT_CONFIG_FILE), "").unwrap();

        let sub_dir = dir.path().join("sub").join("dir");
        fs::create_dir_all(&sub_dir).unwrap();

        let found = Config::find_project_config(&sub_dir);
        assert_eq!(found, Some(dir.path().join(PROJECT_CONFIG_FILE)));
    }

    #[test]
    fn find_project_config_none() {
        let dir = TempDir::new().unwrap();
        let sub_dir = dir.path().join("empty");
        fs::create_dir_all(&sub_dir).unwrap();

        // An ancestor of the temp dir could hold a riimi.toml, so only check
        // that nothing inside the temp dir is reported
        let found = Config::find_project_config(&sub_dir);
        assert!(found.map_or(true, |p| !p.starts_with(dir.path())));
    }

    #[test]
    fn explicit_project_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[analysis]\nevery_syllable = true\n").unwrap();

        let config = Config::with_project_file(&path).unwrap();
        assert!(config.project.analysis.every_syllable);
        assert_eq!(config.project_file, Some(path));
    }

    #[test]
    fn explicit_project_file_missing() {
        let dir = TempDir::new().unwrap();
        assert!(Config::with_project_file(&dir.path().join("nope.toml")).is_err());
    }

    #[test]
    fn invalid_project_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(PROJECT_CONFIG_FILE);
        fs::write(&path, "[analysis\n").unwrap();

        assert!(Config::with_project_file(&path).is_err());
    }

    #[test]
    fn build_builtin_hyphenator() {
        let hyphenator = HyphenatorConfig::default().build().unwrap();
        assert_eq!(hyphenator.name(), "builtin");
    }

    #[test]
    fn build_command_hyphenator() {
        let config = HyphenatorConfig {
            kind: HyphenatorKind::Command,
            command: vec!["python".to_string(), "voikk.py".to_string()],
            ..HyphenatorConfig::default()
        };

        let hyphenator = config.build().unwrap();
        assert_eq!(hyphenator.name(), "python");
    }

    #[test]
    fn command_hyphenator_requires_program() {
        let config = HyphenatorConfig {
            kind: HyphenatorKind::Command,
            ..HyphenatorConfig::default()
        };

        assert!(matches!(config.build(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn command_hyphenator_rejects_zero_timeout() {
        let config = HyphenatorConfig {
            kind: HyphenatorKind::Command,
            command: vec!["python".to_string()],
            timeout_seconds: 0,
            ..HyphenatorConfig::default()
        };

        assert!(matches!(config.build(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn effective_config_as_toml() {
        let toml = Config::default().to_toml().unwrap();
        assert!(toml.contains("[global]"));
        assert!(toml.contains("debounce_ms = 2000"));
        assert!(toml.contains("kind = \"builtin\""));
    }
}
