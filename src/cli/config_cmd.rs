//! Config CLI commands

use anyhow::Result;
use clap::Subcommand;

use super::output::Output;
use crate::storage::Config;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,

    /// Show where configuration files are read from
    Path,
}

pub fn run(cmd: ConfigCommands, output: &Output, config: &Config) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show(output, config),
        ConfigCommands::Path => path(output, config),
    }
}

fn show(output: &Output, config: &Config) -> Result<()> {
    if output.is_json() {
        output.data(config);
    } else {
        print!("{}", config.to_toml()?);
    }
    Ok(())
}

fn path(output: &Output, config: &Config) -> Result<()> {
    let global = Config::global_config_path();

    if output.is_json() {
        output.data(&serde_json::json!({
            "global": global,
            "project": config.project_file,
        }));
    } else {
        let describe = |path: Option<&std::path::Path>| match path {
            Some(path) if path.exists() => path.display().to_string(),
            Some(path) => format!("{} (not found)", path.display()),
            None => "(none)".to_string(),
        };
        println!("global:  {}", describe(global.as_deref()));
        println!("project: {}", describe(config.project_file.as_deref()));
    }
    Ok(())
}
