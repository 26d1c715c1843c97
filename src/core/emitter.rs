//! Filesystem effects of an emission plan.
//!
//! Every primitive overwrites what it finds and creates missing ancestor
//! directories. The first failure aborts the run; nothing already written
//! is rolled back.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::assets;
use crate::context::ProjectContext;
use crate::error::{EmissionOperation, Error, Result};
use crate::local_files::FileSystem;
use crate::plan::{EmissionAction, EmissionStep};
use crate::utils::template;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmittedEntry {
    pub step: EmissionStep,
    pub operation: EmissionOperation,
    pub path: String,
}

pub struct FileEmitter<'a, F: FileSystem> {
    fs: &'a F,
    root: PathBuf,
    ctx: &'a ProjectContext,
}

impl<'a, F: FileSystem> FileEmitter<'a, F> {
    pub fn new(fs: &'a F, root: impl Into<PathBuf>, ctx: &'a ProjectContext) -> Self {
        Self {
            fs,
            root: root.into(),
            ctx,
        }
    }

    fn resolve(&self, rel: &str) -> PathBuf {
        if rel.is_empty() {
            self.root.clone()
        } else {
            self.root.join(rel)
        }
    }

    pub fn create_directory(&self, rel: &str) -> Result<()> {
        let path = self.resolve(rel);
        self.fs
            .ensure_dir(&path)
            .map_err(|e| fail(EmissionOperation::CreateDirectory, rel, e))
    }

    pub fn copy_static(&self, asset_id: &str, rel: &str) -> Result<()> {
        let asset = assets::get(asset_id)?;
        self.write_file(EmissionOperation::CopyStatic, rel, asset.contents)
    }

    /// Render a bundled template against the context and write it.
    ///
    /// Placeholders the context does not define are an error, and the
    /// destination is left untouched.
    pub fn render_template(&self, asset_id: &str, rel: &str) -> Result<()> {
        let text = assets::get(asset_id)?.text()?;
        self.render_text(asset_id, text, rel)
    }

    /// Render `text` (named `source` in errors) against the context and write it.
    pub fn render_text(&self, source: &str, text: &str, rel: &str) -> Result<()> {
        let variables = self.ctx.variables();

        let unresolved = template::unresolved(text, &variables);
        if !unresolved.is_empty() {
            return Err(Error::template_unknown_placeholder(source, unresolved));
        }

        let rendered = template::render(text, &variables);
        self.write_file(EmissionOperation::RenderTemplate, rel, rendered.as_bytes())
    }

    pub fn write_generated(&self, rel: &str, contents: &str) -> Result<()> {
        self.write_file(EmissionOperation::WriteGenerated, rel, contents.as_bytes())
    }

    fn write_file(&self, operation: EmissionOperation, rel: &str, contents: &[u8]) -> Result<()> {
        let path = self.resolve(rel);
        if let Some(parent) = path.parent() {
            self.fs.ensure_dir(parent).map_err(|e| {
                fail(
                    EmissionOperation::CreateDirectory,
                    &display_parent(rel, parent),
                    e,
                )
            })?;
        }
        self.fs
            .write(&path, contents)
            .map_err(|e| fail(operation, rel, e))
    }

    pub fn execute(&self, step: EmissionStep, action: &EmissionAction) -> Result<EmittedEntry> {
        let operation = match action {
            EmissionAction::CreateDirectory { path } => {
                self.create_directory(path)?;
                EmissionOperation::CreateDirectory
            }
            EmissionAction::CopyStatic { asset, dest } => {
                self.copy_static(asset, dest)?;
                EmissionOperation::CopyStatic
            }
            EmissionAction::RenderTemplate { asset, dest } => {
                self.render_template(asset, dest)?;
                EmissionOperation::RenderTemplate
            }
            EmissionAction::WriteGenerated { dest, contents } => {
                self.write_generated(dest, contents)?;
                EmissionOperation::WriteGenerated
            }
        };

        crate::log_status!("emit", "{} {}", operation.as_str(), action.path());

        Ok(EmittedEntry {
            step,
            operation,
            path: action.path().to_string(),
        })
    }
}

fn fail(operation: EmissionOperation, rel: &str, err: std::io::Error) -> Error {
    Error::emission_failed(operation, rel, err.to_string())
}

// Ancestor failures are reported as directory creation, relative when possible.
fn display_parent(rel: &str, parent: &Path) -> String {
    match rel.rsplit_once('/') {
        Some((dir, _)) => dir.to_string(),
        None => parent.display().to_string(),
    }
}
