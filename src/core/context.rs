//! Immutable per-run project context shared by every emission action.

use serde::Serialize;

use crate::answers::ProjectAnswers;
use crate::manifest::DependencyManifest;
use crate::utils::template::TemplateVars;

/// Greetings shown on the generated landing page.
pub const GREETINGS: &[&str] = &[
    "<span style=\"font-family:Courier New,Courier,monospace;\">display: block;</span>",
    "Make it so.",
    "You have arrived.",
    "Many internet. Such wow.",
    "Are you feeling <strong>Sass</strong>y?",
    "It's UNION, not Union.",
];

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectContext {
    pub name: String,
    pub slug: String,
    pub version: String,
    pub answers: ProjectAnswers,
    pub manifest: DependencyManifest,
    pub dist_assets_url: String,
    pub greeting: String,
}

impl ProjectContext {
    pub fn new(name: &str, version: &str, answers: ProjectAnswers) -> Self {
        let manifest = DependencyManifest::build(name);
        let dist_assets_url = public_url(&answers.public_path, &answers.dist_assets_path);
        let greeting = pick_greeting(&manifest.name).to_string();

        Self {
            name: name.to_string(),
            slug: manifest.name.clone(),
            version: version.to_string(),
            answers,
            manifest,
            dist_assets_url,
            greeting,
        }
    }

    /// Template variable table, borrowed from the context.
    pub fn variables(&self) -> Vec<(&'static str, &str)> {
        vec![
            (TemplateVars::NAME, self.name.as_str()),
            (TemplateVars::SLUG, self.slug.as_str()),
            (TemplateVars::VERSION, self.version.as_str()),
            (TemplateVars::SITE_URL, self.answers.site_url.as_str()),
            (TemplateVars::PUBLIC_PATH, self.answers.public_path.as_str()),
            (TemplateVars::TEMPLATE_PATH, self.answers.template_path.as_str()),
            (TemplateVars::SRC_ASSETS_PATH, self.answers.src_assets_path.as_str()),
            (TemplateVars::DIST_ASSETS_PATH, self.answers.dist_assets_path.as_str()),
            (TemplateVars::DIST_ASSETS_URL, self.dist_assets_url.as_str()),
            (TemplateVars::GREETING, self.greeting.as_str()),
        ]
    }
}

/// URL path under which `asset_path` is served when `public_path` is the web root.
///
/// `("public", "public/dist")` gives `/dist`. A path outside the public
/// directory is served as-is from the root. The web root itself is `""` so
/// templates can append `/css/...` directly.
fn public_url(public_path: &str, asset_path: &str) -> String {
    let relative = if public_path.is_empty() {
        asset_path
    } else {
        asset_path
            .strip_prefix(public_path)
            .and_then(|rest| {
                if rest.is_empty() {
                    Some(rest)
                } else {
                    rest.strip_prefix('/')
                }
            })
            .unwrap_or(asset_path)
    };
    format!("/{}", relative.trim_start_matches('/'))
        .trim_end_matches('/')
        .to_string()
}

// Same slug, same greeting: reruns produce identical files.
fn pick_greeting(slug: &str) -> &'static str {
    let sum: usize = slug.bytes().map(usize::from).sum();
    GREETINGS[sum % GREETINGS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers() -> ProjectAnswers {
        ProjectAnswers {
            site_url: "dev.union.co".to_string(),
            public_path: "public".to_string(),
            template_path: "app/views".to_string(),
            src_assets_path: "public/src".to_string(),
            dist_assets_path: "public/dist".to_string(),
        }
    }

    #[test]
    fn slug_comes_from_manifest() {
        let ctx = ProjectContext::new("My Cool Site", "0.0.1", answers());
        assert_eq!(ctx.slug, "my-cool-site");
        assert_eq!(ctx.manifest.name, ctx.slug);
    }

    #[test]
    fn dist_url_is_relative_to_public_root() {
        assert_eq!(public_url("public", "public/dist"), "/dist");
        assert_eq!(public_url("public", "public"), "");
        assert_eq!(public_url("public", "assets/dist"), "/assets/dist");
        assert_eq!(public_url("public", "publicity/dist"), "/publicity/dist");
        assert_eq!(public_url("", "dist"), "/dist");
    }

    #[test]
    fn greeting_is_deterministic() {
        let a = ProjectContext::new("Alpha", "0.0.1", answers());
        let b = ProjectContext::new("Alpha", "0.0.1", answers());
        assert_eq!(a.greeting, b.greeting);
        assert!(GREETINGS.contains(&a.greeting.as_str()));
    }

    #[test]
    fn variables_cover_every_template_key() {
        let ctx = ProjectContext::new("Alpha", "1.0.0", answers());
        let vars = ctx.variables();
        let lookup = |key: &str| vars.iter().find(|(k, _)| *k == key).map(|(_, v)| *v);

        assert_eq!(lookup(TemplateVars::SITE_URL), Some("dev.union.co"));
        assert_eq!(lookup(TemplateVars::VERSION), Some("1.0.0"));
        assert_eq!(lookup(TemplateVars::DIST_ASSETS_URL), Some("/dist"));
        assert_eq!(vars.len(), 10);
    }
}
