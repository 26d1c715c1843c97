//! Ordered emission plan derived from the project context.

use serde::Serialize;

use crate::context::ProjectContext;
use crate::error::Result;
use crate::utils::path::join;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmissionStep {
    Gulpfile,
    PackageManifest,
    VcsFiles,
    DependencyFiles,
    LintConfig,
    StaticAssets,
    Styles,
    Views,
    PublicTree,
}

impl EmissionStep {
    /// Execution order. Fixed so reruns give reproducible diffs.
    pub const ORDER: [EmissionStep; 9] = [
        EmissionStep::Gulpfile,
        EmissionStep::PackageManifest,
        EmissionStep::VcsFiles,
        EmissionStep::DependencyFiles,
        EmissionStep::LintConfig,
        EmissionStep::StaticAssets,
        EmissionStep::Styles,
        EmissionStep::Views,
        EmissionStep::PublicTree,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmissionStep::Gulpfile => "gulpfile",
            EmissionStep::PackageManifest => "package_manifest",
            EmissionStep::VcsFiles => "vcs_files",
            EmissionStep::DependencyFiles => "dependency_files",
            EmissionStep::LintConfig => "lint_config",
            EmissionStep::StaticAssets => "static_assets",
            EmissionStep::Styles => "styles",
            EmissionStep::Views => "views",
            EmissionStep::PublicTree => "public_tree",
        }
    }
}

/// One filesystem effect. Paths are relative to the target root, `/`-separated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmissionAction {
    CreateDirectory { path: String },
    CopyStatic { asset: &'static str, dest: String },
    RenderTemplate { asset: &'static str, dest: String },
    WriteGenerated { dest: String, contents: String },
}

impl EmissionAction {
    pub fn path(&self) -> &str {
        match self {
            EmissionAction::CreateDirectory { path } => path,
            EmissionAction::CopyStatic { dest, .. }
            | EmissionAction::RenderTemplate { dest, .. }
            | EmissionAction::WriteGenerated { dest, .. } => dest,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlannedStep {
    pub step: EmissionStep,
    pub actions: Vec<EmissionAction>,
}

#[derive(Debug, Clone)]
pub struct EmissionPlan {
    pub steps: Vec<PlannedStep>,
}

fn mkdir(path: String) -> EmissionAction {
    EmissionAction::CreateDirectory { path }
}

fn copy(asset: &'static str, dest: impl Into<String>) -> EmissionAction {
    EmissionAction::CopyStatic {
        asset,
        dest: dest.into(),
    }
}

fn render(asset: &'static str, dest: impl Into<String>) -> EmissionAction {
    EmissionAction::RenderTemplate {
        asset,
        dest: dest.into(),
    }
}

impl EmissionPlan {
    pub fn build(ctx: &ProjectContext) -> Result<Self> {
        let steps = EmissionStep::ORDER
            .iter()
            .map(|&step| {
                Ok(PlannedStep {
                    step,
                    actions: actions_for(step, ctx)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { steps })
    }

    pub fn actions(&self) -> impl Iterator<Item = (EmissionStep, &EmissionAction)> {
        self.steps
            .iter()
            .flat_map(|planned| planned.actions.iter().map(move |a| (planned.step, a)))
    }

    pub fn step(&self, step: EmissionStep) -> Option<&PlannedStep> {
        self.steps.iter().find(|planned| planned.step == step)
    }
}

fn actions_for(step: EmissionStep, ctx: &ProjectContext) -> Result<Vec<EmissionAction>> {
    let answers = &ctx.answers;
    let public = answers.public_path.as_str();
    let src = answers.src_assets_path.as_str();

    let actions = match step {
        EmissionStep::Gulpfile => vec![render("gulpfile.js", "gulpfile.js")],
        EmissionStep::PackageManifest => vec![render("_package.json", "package.json")],
        EmissionStep::VcsFiles => vec![
            copy("gitignore", ".gitignore"),
            copy("gitattributes", ".gitattributes"),
        ],
        EmissionStep::DependencyFiles => vec![
            copy("bowerrc", ".bowerrc"),
            EmissionAction::WriteGenerated {
                dest: "bower.json".to_string(),
                contents: ctx.manifest.to_json()?,
            },
        ],
        EmissionStep::LintConfig => vec![copy("jshintrc", ".jshintrc")],
        EmissionStep::StaticAssets => vec![
            copy("favicon.ico", join(public, "favicon.ico")),
            copy("apple-touch-icon.png", join(public, "apple-touch-icon.png")),
            copy("robots.txt", join(public, "robots.txt")),
        ],
        EmissionStep::Styles => vec![copy("screen.scss", join(src, "scss/screen.scss"))],
        EmissionStep::Views => vec![
            mkdir(public.to_string()),
            render("index.html", join(public, "index.html")),
        ],
        EmissionStep::PublicTree => vec![
            mkdir(src.to_string()),
            mkdir(join(src, "js")),
            mkdir(join(src, "js/vendor")),
            mkdir(join(src, "scss")),
            mkdir(join(src, "scss/vendor")),
            mkdir(join(src, "img")),
            mkdir(join(src, "fonts")),
            mkdir(answers.dist_assets_path.clone()),
            copy("app.js", join(src, "js/app.js")),
        ],
    };

    Ok(actions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::{ProjectAnswers, RawAnswers};

    fn union_context() -> ProjectContext {
        let answers = ProjectAnswers::from_raw(RawAnswers {
            site_url: "dev.union.co".to_string(),
            public_path: "public/".to_string(),
            template_path: "app/views/".to_string(),
            src_assets_path: "public/src/".to_string(),
            dist_assets_path: "public/dist/".to_string(),
        });
        ProjectContext::new("Union Site", "0.0.1", answers)
    }

    #[test]
    fn steps_follow_declared_order() {
        let plan = EmissionPlan::build(&union_context()).unwrap();
        let order: Vec<EmissionStep> = plan.steps.iter().map(|s| s.step).collect();
        assert_eq!(order, EmissionStep::ORDER.to_vec());
    }

    #[test]
    fn destinations_use_normalized_paths() {
        let plan = EmissionPlan::build(&union_context()).unwrap();
        let paths: Vec<&str> = plan.actions().map(|(_, a)| a.path()).collect();

        assert!(paths.contains(&"public/index.html"));
        assert!(paths.contains(&"public/src/scss/screen.scss"));
        assert!(paths.contains(&"public/src/js/vendor"));
        assert!(paths.contains(&"public/dist"));
        assert!(paths.iter().all(|p| !p.contains("//") && !p.ends_with('/')));
    }

    #[test]
    fn views_creates_public_dir_before_index() {
        let plan = EmissionPlan::build(&union_context()).unwrap();
        let views = plan.step(EmissionStep::Views).unwrap();
        assert_eq!(
            views.actions[0],
            EmissionAction::CreateDirectory {
                path: "public".to_string()
            }
        );
        assert_eq!(views.actions[1].path(), "public/index.html");
    }

    #[test]
    fn public_tree_creates_dirs_before_app_js() {
        let plan = EmissionPlan::build(&union_context()).unwrap();
        let tree = plan.step(EmissionStep::PublicTree).unwrap();
        let last = tree.actions.last().unwrap();
        assert_eq!(last.path(), "public/src/js/app.js");
        assert!(tree.actions[..tree.actions.len() - 1]
            .iter()
            .all(|a| matches!(a, EmissionAction::CreateDirectory { .. })));
    }

    #[test]
    fn bower_json_is_generated_from_manifest() {
        let ctx = union_context();
        let plan = EmissionPlan::build(&ctx).unwrap();
        let deps = plan.step(EmissionStep::DependencyFiles).unwrap();
        match &deps.actions[1] {
            EmissionAction::WriteGenerated { dest, contents } => {
                assert_eq!(dest, "bower.json");
                assert!(contents.contains("\"name\": \"union-site\""));
            }
            other => panic!("unexpected action {:?}", other),
        }
    }

    #[test]
    fn empty_public_path_targets_project_root() {
        let mut ctx = union_context();
        ctx.answers.public_path = String::new();
        let plan = EmissionPlan::build(&ctx).unwrap();
        let statics = plan.step(EmissionStep::StaticAssets).unwrap();
        assert_eq!(statics.actions[2].path(), "robots.txt");
    }
}
