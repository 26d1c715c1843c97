//! Command execution primitives with consistent error handling.

use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use crate::error::{Error, Result};

/// Run a command in `dir`, forwarding its stdout and stderr to our stderr.
///
/// stdout is reserved for the JSON response, so child output never lands
/// there. Returns the exit status; a spawn failure is an error.
pub fn run_streaming_in(dir: &Path, program: &str, args: &[String]) -> Result<ExitStatus> {
    Command::new(program)
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::from(std::io::stderr()))
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| {
            Error::internal_io(
                format!("Failed to run {}: {}", program, e),
                Some(display_command(program, args)),
            )
        })
}

/// Render `program args...` for messages.
pub fn display_command(program: &str, args: &[String]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_command_joins_args() {
        let args = vec!["install".to_string(), "--silent".to_string()];
        assert_eq!(display_command("npm", &args), "npm install --silent");
        assert_eq!(display_command("gulp", &[]), "gulp");
    }

    #[test]
    fn missing_program_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_streaming_in(dir.path(), "union-gen-no-such-program", &[]).unwrap_err();
        assert_eq!(err.code.as_str(), "internal.io_error");
    }

    #[cfg(unix)]
    #[test]
    fn streaming_reports_exit_status() {
        let dir = tempfile::tempdir().unwrap();
        let args = vec!["-c".to_string(), "echo progress; exit 3".to_string()];
        let status = run_streaming_in(dir.path(), "sh", &args).unwrap();
        assert_eq!(status.code(), Some(3));
    }
}
