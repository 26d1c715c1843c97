use clap::{Args, Subcommand};
use serde::Serialize;

use union_gen::defaults::{self, Defaults, UnionGenConfig};

use super::CmdResult;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Display configuration (merged defaults + file)
    Show {
        /// Show only built-in defaults (ignore union-gen.json)
        #[arg(long)]
        builtin: bool,
    },
    /// Reset configuration to built-in defaults (deletes union-gen.json)
    Reset,
    /// Show the path to union-gen.json
    Path,
}

#[derive(Debug, Serialize)]
pub struct ConfigOutput {
    command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    config: Option<UnionGenConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    defaults: Option<Defaults>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exists: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    deleted: Option<bool>,
}

impl ConfigOutput {
    fn new(command: &str) -> Self {
        Self {
            command: command.to_string(),
            config: None,
            defaults: None,
            path: None,
            exists: None,
            deleted: None,
        }
    }
}

pub fn run(args: ConfigArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<ConfigOutput> {
    match args.command {
        ConfigCommand::Show { builtin } => show(builtin),
        ConfigCommand::Reset => reset(),
        ConfigCommand::Path => path(),
    }
}

fn show(builtin: bool) -> CmdResult<ConfigOutput> {
    let mut output = ConfigOutput::new("config.show");
    if builtin {
        output.defaults = Some(Defaults::default());
    } else {
        output.config = Some(defaults::load_config());
        output.path = Some(defaults::config_path()?);
        output.exists = Some(defaults::config_exists());
    }
    Ok((output, 0))
}

fn reset() -> CmdResult<ConfigOutput> {
    let deleted = defaults::reset_config()?;

    let mut output = ConfigOutput::new("config.reset");
    output.config = Some(UnionGenConfig::default());
    output.path = Some(defaults::config_path()?);
    output.deleted = Some(deleted);
    Ok((output, 0))
}

fn path() -> CmdResult<ConfigOutput> {
    let mut output = ConfigOutput::new("config.path");
    output.path = Some(defaults::config_path()?);
    output.exists = Some(defaults::config_exists());
    Ok((output, 0))
}
