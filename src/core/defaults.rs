use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::paths;

/// Root configuration structure for union-gen.json
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UnionGenConfig {
    #[serde(default)]
    pub defaults: Defaults,
}

/// All configurable defaults that can be overridden via union-gen.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    #[serde(default = "default_install")]
    pub install: InstallConfig,

    #[serde(default = "default_project")]
    pub project: ProjectConfig,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            install: default_install(),
            project: default_project(),
        }
    }
}

/// Commands run by the install step, in order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallConfig {
    #[serde(default = "default_install_commands")]
    pub commands: Vec<InstallCommandConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InstallCommandConfig {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

/// Values rendered into generated project files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default = "default_version")]
    pub version: String,
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_install() -> InstallConfig {
    InstallConfig {
        commands: default_install_commands(),
    }
}

fn default_install_commands() -> Vec<InstallCommandConfig> {
    vec![
        InstallCommandConfig {
            program: "npm".to_string(),
            args: vec!["install".to_string()],
        },
        InstallCommandConfig {
            program: "bower".to_string(),
            args: vec!["install".to_string()],
        },
    ]
}

fn default_project() -> ProjectConfig {
    ProjectConfig {
        version: default_version(),
    }
}

fn default_version() -> String {
    "0.0.1".to_string()
}

// =============================================================================
// Loading functions
// =============================================================================

/// Load defaults, merging file config with built-in defaults.
/// If union-gen.json is missing or invalid, silently returns built-in defaults.
pub fn load_defaults() -> Defaults {
    load_config().defaults
}

/// Load the full union-gen.json config, falling back to defaults on any error.
pub fn load_config() -> UnionGenConfig {
    paths::config_json()
        .and_then(|path| load_config_from(&path))
        .unwrap_or_default()
}

/// Attempt to load config from a specific file.
pub fn load_config_from(path: &Path) -> crate::Result<UnionGenConfig> {
    if !path.exists() {
        return Err(crate::Error::other(format!(
            "{} not found",
            path.display()
        )));
    }

    let content = fs::read_to_string(path).map_err(|e| {
        crate::Error::internal_io(e.to_string(), Some(format!("read {}", path.display())))
    })?;

    serde_json::from_str(&content)
        .map_err(|e| crate::Error::config_invalid_json(path.display().to_string(), e))
}

/// Check if union-gen.json file exists
pub fn config_exists() -> bool {
    paths::config_json()
        .map(|p| p.exists())
        .unwrap_or(false)
}

/// Delete union-gen.json file (reset to defaults)
pub fn reset_config() -> crate::Result<bool> {
    let path = paths::config_json()?;

    if path.exists() {
        fs::remove_file(&path).map_err(|e| {
            crate::Error::internal_io(e.to_string(), Some(format!("delete {}", path.display())))
        })?;
        Ok(true)
    } else {
        Ok(false)
    }
}

/// Get the path to union-gen.json (for display purposes)
pub fn config_path() -> crate::Result<String> {
    Ok(paths::config_json()?.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_install_runs_npm_then_bower() {
        let defaults = Defaults::default();
        let programs: Vec<&str> = defaults
            .install
            .commands
            .iter()
            .map(|c| c.program.as_str())
            .collect();
        assert_eq!(programs, vec!["npm", "bower"]);
        assert_eq!(defaults.project.version, "0.0.1");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("union-gen.json");
        fs::write(&path, r#"{"defaults":{"project":{"version":"1.2.0"}}}"#).unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.defaults.project.version, "1.2.0");
        assert_eq!(config.defaults.install.commands.len(), 2);
    }

    #[test]
    fn custom_install_commands_replace_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("union-gen.json");
        fs::write(
            &path,
            r#"{"defaults":{"install":{"commands":[{"program":"yarn"}]}}}"#,
        )
        .unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(
            config.defaults.install.commands,
            vec![InstallCommandConfig {
                program: "yarn".to_string(),
                args: Vec::new(),
            }]
        );
    }

    #[test]
    fn invalid_json_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("union-gen.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert_eq!(err.code.as_str(), "config.invalid_json");
        assert!(load_config_from(&path).unwrap_or_default().defaults.install.commands.len() == 2);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("absent.json")).unwrap_or_default();
        assert_eq!(config.defaults.project.version, "0.0.1");
    }
}
