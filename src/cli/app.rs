//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::analyze::{self, DisplayArgs};
use super::output::{Output, OutputFormat};
use super::{classify, config_cmd, hyphenate, watch};
use crate::storage::Config;

#[derive(Parser)]
#[command(name = "riimi")]
#[command(author, version, about = "Rhyme analysis for Finnish song lyrics")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the global config, then text)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Project config file (defaults to riimi.toml in this or a parent directory)
    #[arg(long, short = 'c', global = true, env = "RIIMI_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze the rhymes of a lyric file
    Analyze {
        /// Lyric file (reads stdin when omitted or `-`)
        file: Option<PathBuf>,

        #[command(flatten)]
        display: DisplayArgs,
    },

    /// Classify the rhyme between two syllables
    Classify {
        /// First syllable
        first: String,

        /// Second syllable
        second: String,

        /// List every rule the pair satisfies
        #[arg(long)]
        all: bool,
    },

    /// Print the syllable stream of a lyric file
    Hyphenate {
        /// Lyric file (reads stdin when omitted or `-`)
        file: Option<PathBuf>,

        /// Show the parsed verse/line/word tree instead of the raw stream
        #[arg(long)]
        tree: bool,
    },

    /// Re-analyze a lyric file whenever it changes
    Watch {
        /// Lyric file to watch
        file: PathBuf,

        #[command(flatten)]
        display: DisplayArgs,

        /// Clear the terminal before each analysis
        #[arg(long)]
        clear: bool,
    },

    /// Inspect configuration
    #[command(subcommand)]
    Config(config_cmd::ConfigCommands),
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::with_project_file(path)?,
        None => Config::load()?,
    };

    let format = cli
        .format
        .unwrap_or_else(|| config.global.default_format.into());
    let output = Output::new(format, cli.verbose);

    output.verbose("riimi starting");
    match &config.project_file {
        Some(path) => output.verbose_ctx("config", &format!("Project config: {}", path.display())),
        None => output.verbose_ctx("config", "No project config, using defaults"),
    }

    match cli.command {
        Commands::Analyze { file, display } => {
            analyze::run(&output, &config, file.as_deref(), &display)?
        }

        Commands::Classify { first, second, all } => {
            classify::run(&output, &first, &second, all)?
        }

        Commands::Hyphenate { file, tree } => {
            hyphenate::run(&output, &config, file.as_deref(), tree)?
        }

        Commands::Watch {
            file,
            display,
            clear,
        } => watch::run(&output, &config, &file, &display, clear)?,

        Commands::Config(cmd) => config_cmd::run(cmd, &output, &config)?,
    }

    output.verbose("Command completed successfully");
    Ok(())
}
