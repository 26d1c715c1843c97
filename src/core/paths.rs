use crate::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Base config directory (~/.config/union-gen/ on Unix-like systems)
pub fn union_gen() -> Result<PathBuf> {
    #[cfg(windows)]
    {
        let appdata = env::var("APPDATA").map_err(|_| {
            Error::internal_unexpected(
                "APPDATA environment variable not set on Windows".to_string(),
            )
        })?;
        Ok(PathBuf::from(appdata).join("union-gen"))
    }

    #[cfg(not(windows))]
    {
        let home = env::var("HOME").map_err(|_| {
            Error::internal_unexpected(
                "HOME environment variable not set on Unix-like system".to_string(),
            )
        })?;
        Ok(PathBuf::from(home).join(".config").join("union-gen"))
    }
}

/// Global union-gen.json config file path
pub fn config_json() -> Result<PathBuf> {
    Ok(union_gen()?.join("union-gen.json"))
}

/// Expand `~` in a user-supplied target directory.
pub fn expand_target(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).to_string())
}

/// Project name implied by a target directory: its final path component.
///
/// Relative targets such as `.` are resolved against the current directory
/// first. Falls back to an empty name for filesystem roots.
pub fn project_name_for(target: &Path) -> String {
    let resolved = if target.is_absolute() {
        target.to_path_buf()
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(target))
            .unwrap_or_else(|_| target.to_path_buf())
    };

    resolved
        .components()
        .filter_map(|c| match c {
            std::path::Component::Normal(part) => Some(part.to_string_lossy().to_string()),
            std::path::Component::ParentDir => Some("..".to_string()),
            _ => None,
        })
        .fold(Vec::new(), |mut parts: Vec<String>, part| {
            if part == ".." {
                parts.pop();
            } else {
                parts.push(part);
            }
            parts
        })
        .pop()
        .unwrap_or_default()
}
