use clap::Args;
use std::io;

use union_gen::answers::{AnswerSource, PresetAnswers, PromptAnswers};
use union_gen::console::TerminalConsole;
use union_gen::defaults;
use union_gen::generator::{GenerateOutput, Generator, GeneratorOptions, ProjectSettings};
use union_gen::install::CommandInstaller;
use union_gen::local_files;
use union_gen::paths;

use super::CmdResult;

#[derive(Args)]
pub struct InitArgs {
    /// Directory to generate the project into
    #[arg(default_value = ".")]
    pub target: String,

    /// Project name (defaults to the target directory name)
    #[arg(long)]
    pub name: Option<String>,

    /// Don't print the welcome banner
    #[arg(long)]
    pub skip_welcome_message: bool,

    /// Don't run npm install & bower install
    #[arg(long)]
    pub skip_install: bool,

    /// Skip the completion notice and the install summary
    #[arg(long)]
    pub skip_install_message: bool,

    /// The URL of your local development site
    #[arg(long, value_name = "URL")]
    pub site_url: Option<String>,

    /// The public web root
    #[arg(long, value_name = "PATH")]
    pub public_path: Option<String>,

    /// Where HTML templates live
    #[arg(long, value_name = "PATH")]
    pub template_path: Option<String>,

    /// Where source assets live
    #[arg(long, value_name = "PATH")]
    pub src_assets_path: Option<String>,

    /// Where compiled assets are written
    #[arg(long, value_name = "PATH")]
    pub dist_assets_path: Option<String>,
}

impl InitArgs {
    fn preset(&self) -> PresetAnswers {
        PresetAnswers {
            site_url: self.site_url.clone(),
            public_path: self.public_path.clone(),
            template_path: self.template_path.clone(),
            src_assets_path: self.src_assets_path.clone(),
            dist_assets_path: self.dist_assets_path.clone(),
        }
    }

    fn options(&self) -> GeneratorOptions {
        GeneratorOptions {
            skip_welcome_message: self.skip_welcome_message,
            skip_install: self.skip_install,
            skip_install_message: self.skip_install_message,
        }
    }
}

pub fn run_json(args: InitArgs) -> CmdResult<GenerateOutput> {
    let target = paths::expand_target(&args.target);
    if target.is_file() {
        return Err(union_gen::Error::validation_invalid_argument(
            "target",
            "Target exists and is not a directory",
            Some(target.display().to_string()),
        ));
    }
    let name = args
        .name
        .clone()
        .unwrap_or_else(|| paths::project_name_for(&target));
    let config = defaults::load_defaults();

    let settings = ProjectSettings {
        target,
        name,
        version: config.project.version,
    };

    let preset = args.preset();
    let stdin = io::stdin();
    let mut prompt;
    let mut flags_only;
    // Incomplete presets without a terminal fail with the missing flags.
    let answers: &mut dyn AnswerSource =
        if preset.is_complete() || !crate::tty::require_tty_for_interactive() {
            flags_only = preset;
            &mut flags_only
        } else {
            prompt = PromptAnswers::new(preset, stdin.lock(), io::stderr());
            &mut prompt
        };

    let fs = local_files::local();
    let mut installer = CommandInstaller::new(config.install.commands);
    let mut console = TerminalConsole;

    let output = Generator::new(
        settings,
        args.options(),
        &fs,
        answers,
        &mut installer,
        &mut console,
    )
    .run()?;

    // Files are on disk either way; a failed install only changes the exit code.
    let exit_code = if output.install.is_failed() {
        crate::output::exit_code_for(union_gen::ErrorCode::InstallCommandFailed)
    } else {
        0
    };

    Ok((output, exit_code))
}
