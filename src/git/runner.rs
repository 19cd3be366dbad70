//! Git subprocess execution.
//!
//! All repository access shells out to the system `git` binary, inheriting
//! the user's existing git config, hooks, and credential store.

use std::io;
use std::path::Path;
use std::process::Command;

use crate::error::GitError;

/// Check that the `git` binary is installed and accessible.
///
/// Uses the `which` crate for cross-platform executable detection.
pub fn check_git_installed() -> Result<(), GitError> {
    if which::which("git").is_err() {
        return Err(GitError::NotInstalled);
    }
    Ok(())
}

/// Run `git` with the given arguments and return its trimmed stdout.
///
/// Captures both output streams. A nonzero exit or missing executable maps
/// to a [`GitError`] carrying the stderr diagnostic; nothing panics past
/// this boundary. No retries, no timeout.
pub fn run_git(args: &[&str], workdir: Option<&Path>) -> Result<String, GitError> {
    let mut command = Command::new("git");
    command.args(args);
    if let Some(dir) = workdir {
        command.current_dir(dir);
    }

    let output = command.output().map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            GitError::NotInstalled
        } else {
            GitError::SpawnFailed(e)
        }
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let code = output.status.code().unwrap_or(-1);
        return Err(GitError::NonZeroExit { code, stderr });
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
