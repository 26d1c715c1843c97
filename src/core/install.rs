//! Dependency installation collaborator.

use serde::Serialize;
use std::path::Path;

use crate::defaults::InstallCommandConfig;
use crate::error::{Error, InstallCommandFailedDetails, Result};
use crate::utils::command;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallOptions {
    /// Skip the installer's own completion message. Command output still streams.
    pub skip_message: bool,
    pub skip_install: bool,
}

pub trait Installer {
    fn install(&mut self, target: &Path, options: &InstallOptions) -> Result<()>;
}

/// Runs the configured install commands one after another in the target directory.
pub struct CommandInstaller {
    commands: Vec<InstallCommandConfig>,
}

impl CommandInstaller {
    pub fn new(commands: Vec<InstallCommandConfig>) -> Self {
        Self { commands }
    }

    fn summary(&self) -> String {
        self.commands
            .iter()
            .map(|c| command::display_command(&c.program, &c.args))
            .collect::<Vec<_>>()
            .join(" & ")
    }

    fn run_one(&self, target: &Path, cmd: &InstallCommandConfig) -> Result<()> {
        let display = command::display_command(&cmd.program, &cmd.args);
        crate::log_status!("install", "Running {}", display);

        let status = command::run_streaming_in(target, &cmd.program, &cmd.args)
            .map_err(|e| spawn_failed(&display, e))?;
        if !status.success() {
            return Err(Error::install_command_failed(InstallCommandFailedDetails {
                command: display,
                exit_code: status.code(),
                cause: format!("exited with {}", status),
            }));
        }

        Ok(())
    }
}

fn spawn_failed(display: &str, err: Error) -> Error {
    let cause = match err.details["error"].as_str() {
        Some(text) => text.to_string(),
        None => err.message.clone(),
    };
    Error::install_command_failed(InstallCommandFailedDetails {
        command: display.to_string(),
        exit_code: None,
        cause,
    })
}

impl Installer for CommandInstaller {
    fn install(&mut self, target: &Path, options: &InstallOptions) -> Result<()> {
        if options.skip_install {
            return Ok(());
        }

        for cmd in &self.commands {
            self.run_one(target, cmd)?;
        }

        if !options.skip_message {
            eprintln!("\nDependencies installed: {}", self.summary());
        }

        Ok(())
    }
}
