//! String template rendering utilities.

use regex::Regex;
use std::sync::LazyLock;

pub struct TemplateVars;

impl TemplateVars {
    pub const NAME: &'static str = "name";
    pub const SLUG: &'static str = "slug";
    pub const VERSION: &'static str = "version";
    pub const SITE_URL: &'static str = "siteUrl";
    pub const PUBLIC_PATH: &'static str = "publicPath";
    pub const TEMPLATE_PATH: &'static str = "templatePath";
    pub const SRC_ASSETS_PATH: &'static str = "srcAssetsPath";
    pub const DIST_ASSETS_PATH: &'static str = "distAssetsPath";
    pub const DIST_ASSETS_URL: &'static str = "distAssetsUrl";
    pub const GREETING: &'static str = "greeting";
}

static PLACEHOLDER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").unwrap()
});

/// Replace each `{{key}}` with its value in a single pass.
///
/// Substituted values are never rescanned, so a value containing `{{x}}`
/// is written literally. Placeholders without a variable are left as-is.
pub fn render(template: &str, variables: &[(&str, &str)]) -> String {
    PLACEHOLDER_PATTERN
        .replace_all(template, |caps: &regex::Captures| {
            let key = &caps[1];
            variables
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Names of placeholders in `template` that have no entry in `variables`.
///
/// Each name is reported once, in order of first appearance.
pub fn unresolved(template: &str, variables: &[(&str, &str)]) -> Vec<String> {
    let mut missing: Vec<String> = Vec::new();
    for caps in PLACEHOLDER_PATTERN.captures_iter(template) {
        let key = &caps[1];
        if variables.iter().any(|(name, _)| *name == key) {
            continue;
        }
        if !missing.iter().any(|m| m == key) {
            missing.push(key.to_string());
        }
    }
    missing
}
