//! Front-end dependency manifest (bower.json).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::utils::slugify::slugify;

/// Front-end libraries every generated project starts with.
pub const FRONTEND_DEPENDENCIES: &[(&str, &str)] = &[
    ("jquery", "~2.1.1"),
    ("modernizr", "~2.8.1"),
    ("normalize-scss", "~3.0.2"),
    ("fastclick", "~1.0.3"),
    ("animate.css", "~3.2.1"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyManifest {
    pub name: String,
    pub private: bool,
    pub dependencies: BTreeMap<String, String>,
}

impl DependencyManifest {
    pub fn build(project_name: &str) -> Self {
        Self {
            name: slugify(project_name),
            private: true,
            dependencies: FRONTEND_DEPENDENCIES
                .iter()
                .map(|(name, version)| (name.to_string(), version.to_string()))
                .collect(),
        }
    }

    /// Pretty JSON with two-space indentation.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            Error::internal_json(e.to_string(), Some("serialize bower.json".to_string()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_slugifies_and_marks_private() {
        let manifest = DependencyManifest::build("My Cool Site");
        assert_eq!(manifest.name, "my-cool-site");
        assert!(manifest.private);
    }

    #[test]
    fn build_has_exactly_the_fixed_dependencies() {
        let manifest = DependencyManifest::build("site");
        assert_eq!(manifest.dependencies.len(), 5);
        assert_eq!(manifest.dependencies["jquery"], "~2.1.1");
        assert_eq!(manifest.dependencies["modernizr"], "~2.8.1");
        assert_eq!(manifest.dependencies["normalize-scss"], "~3.0.2");
        assert_eq!(manifest.dependencies["fastclick"], "~1.0.3");
        assert_eq!(manifest.dependencies["animate.css"], "~3.2.1");
    }

    #[test]
    fn empty_name_gives_empty_slug() {
        assert_eq!(DependencyManifest::build("").name, "");
    }

    #[test]
    fn json_is_two_space_indented_and_stable() {
        let json = DependencyManifest::build("Alpha").to_json().unwrap();
        assert!(json.starts_with("{\n  \"name\": \"alpha\",\n  \"private\": true,"));
        assert_eq!(json, DependencyManifest::build("Alpha").to_json().unwrap());

        let parsed: DependencyManifest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, DependencyManifest::build("Alpha"));
    }
}
