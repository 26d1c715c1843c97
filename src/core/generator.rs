//! Run-once driver: prompt, normalize, build the manifest, emit, install.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::answers::{AnswerSource, ProjectAnswers};
use crate::console::{Console, Message};
use crate::context::ProjectContext;
use crate::emitter::{EmittedEntry, FileEmitter};
use crate::error::{Error, Result};
use crate::install::{InstallOptions, Installer};
use crate::local_files::FileSystem;
use crate::plan::{EmissionPlan, EmissionStep};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorOptions {
    pub skip_welcome_message: bool,
    pub skip_install: bool,
    pub skip_install_message: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorState {
    Init,
    Prompting,
    Normalizing,
    BuildingManifest,
    Emitting(EmissionStep),
    Installing,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum InstallOutcome {
    Skipped,
    Invoked {
        options: InstallOptions,
    },
    /// The installer reported an error. Emitted files are left in place.
    Failed {
        options: InstallOptions,
        error: InstallFailure,
    },
}

impl InstallOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, InstallOutcome::Failed { .. })
    }
}

/// Serializable form of an installer error, kept in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallFailure {
    pub code: &'static str,
    pub message: String,
    pub details: serde_json::Value,
}

impl From<Error> for InstallFailure {
    fn from(err: Error) -> Self {
        Self {
            code: err.code.as_str(),
            message: err.message,
            details: err.details,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateOutput {
    pub target: String,
    pub project: ProjectContext,
    pub states: Vec<GeneratorState>,
    pub emitted: Vec<EmittedEntry>,
    pub install: InstallOutcome,
    pub messages: Vec<String>,
}

/// Project identity that does not come from the operator's answers.
#[derive(Debug, Clone)]
pub struct ProjectSettings {
    pub target: PathBuf,
    pub name: String,
    pub version: String,
}

pub struct Generator<'a, F: FileSystem> {
    settings: ProjectSettings,
    options: GeneratorOptions,
    fs: &'a F,
    answers: &'a mut dyn AnswerSource,
    installer: &'a mut dyn Installer,
    console: &'a mut dyn Console,
    states: Vec<GeneratorState>,
    messages: Vec<String>,
}

impl<'a, F: FileSystem> Generator<'a, F> {
    pub fn new(
        settings: ProjectSettings,
        options: GeneratorOptions,
        fs: &'a F,
        answers: &'a mut dyn AnswerSource,
        installer: &'a mut dyn Installer,
        console: &'a mut dyn Console,
    ) -> Self {
        Self {
            settings,
            options,
            fs,
            answers,
            installer,
            console,
            states: vec![GeneratorState::Init],
            messages: Vec::new(),
        }
    }

    fn enter(&mut self, state: GeneratorState) {
        self.states.push(state);
    }

    fn say(&mut self, message: Message) {
        self.console.show(&message);
        self.messages.push(message.plain_text());
    }

    /// Execute the whole pipeline. Consumes the generator: a run cannot be resumed.
    pub fn run(mut self) -> Result<GenerateOutput> {
        self.enter(GeneratorState::Prompting);
        if !self.options.skip_welcome_message {
            self.say(Message::Welcome);
        }
        let raw = self.answers.answers()?;

        self.enter(GeneratorState::Normalizing);
        let answers = ProjectAnswers::from_raw(raw);

        self.enter(GeneratorState::BuildingManifest);
        let ctx = ProjectContext::new(&self.settings.name, &self.settings.version, answers);
        let plan = EmissionPlan::build(&ctx)?;

        let emitted = self.emit(&ctx, &plan)?;

        let target = self.settings.target.clone();
        let install = self.install(&target);

        self.enter(GeneratorState::Done);
        if !self.options.skip_install_message {
            self.say(Message::Completion {
                site_url: ctx.answers.site_url.clone(),
            });
        }

        Ok(GenerateOutput {
            target: target.display().to_string(),
            project: ctx,
            states: self.states,
            emitted,
            install,
            messages: self.messages,
        })
    }

    fn emit(&mut self, ctx: &ProjectContext, plan: &EmissionPlan) -> Result<Vec<EmittedEntry>> {
        let emitter = FileEmitter::new(self.fs, self.settings.target.clone(), ctx);
        let mut emitted = Vec::new();

        for planned in &plan.steps {
            self.enter(GeneratorState::Emitting(planned.step));
            for action in &planned.actions {
                emitted.push(emitter.execute(planned.step, action)?);
            }
        }

        Ok(emitted)
    }

    fn install(&mut self, target: &Path) -> InstallOutcome {
        if self.options.skip_install {
            self.say(Message::ManualInstall);
            return InstallOutcome::Skipped;
        }

        self.enter(GeneratorState::Installing);
        let options = InstallOptions {
            skip_message: self.options.skip_install_message,
            skip_install: false,
        };
        crate::log_status!("install", "Installing dependencies in {}", target.display());
        match self.installer.install(target, &options) {
            Ok(()) => InstallOutcome::Invoked { options },
            Err(err) => {
                crate::log_status!("install", "{}", err);
                InstallOutcome::Failed {
                    options,
                    error: err.into(),
                }
            }
        }
    }
}
