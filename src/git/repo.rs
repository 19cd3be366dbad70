//! Repository access built on the git subprocess runner.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::GitError;
use crate::git::runner::run_git;

/// Handle to a git working tree.
///
/// Read operations degrade to an empty result with a logged warning when the
/// underlying git invocation fails: callers see "no diff" rather than an
/// error. Mutating operations ([`GitRepo::stage_all`], [`GitRepo::commit`])
/// propagate failures.
#[derive(Debug, Clone, Default)]
pub struct GitRepo {
    workdir: Option<PathBuf>,
}

impl GitRepo {
    /// A repository handle for the current working directory.
    pub fn new() -> Self {
        Self { workdir: None }
    }

    /// A repository handle rooted at `workdir`.
    pub fn at(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: Some(workdir.into()),
        }
    }

    fn workdir(&self) -> Option<&Path> {
        self.workdir.as_deref()
    }

    /// Run a read-only git command, degrading to empty output on failure.
    fn read(&self, args: &[&str]) -> String {
        match run_git(args, self.workdir()) {
            Ok(out) => out,
            Err(e) => {
                warn!("git {} failed: {}", args.join(" "), e);
                String::new()
            }
        }
    }

    /// Whether the working directory is inside a git repository.
    pub fn is_repository(&self) -> bool {
        run_git(&["rev-parse", "--git-dir"], self.workdir()).is_ok()
    }

    /// Unified diff of staged changes (`git diff --cached`).
    pub fn staged_diff(&self) -> String {
        self.read(&["diff", "--cached"])
    }

    /// Unified diff of unstaged changes (`git diff`).
    pub fn unstaged_diff(&self) -> String {
        self.read(&["diff"])
    }

    /// Unified diff of staged plus unstaged changes (`git diff HEAD`).
    pub fn diff_against_head(&self) -> String {
        self.read(&["diff", "HEAD"])
    }

    /// Paths of files changed relative to HEAD.
    pub fn changed_files(&self) -> Vec<String> {
        self.read(&["diff", "--name-only", "HEAD"])
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(String::from)
            .collect()
    }

    /// Current branch name, or empty when detached or unavailable.
    pub fn current_branch(&self) -> String {
        self.read(&["branch", "--show-current"])
    }

    /// Subject lines of the most recent commits, newest first.
    pub fn recent_commits(&self, limit: usize) -> Vec<String> {
        self.read(&["log", "--format=%s", "-n", &limit.to_string()])
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(String::from)
            .collect()
    }

    /// Whether the index holds changes ready to commit.
    pub fn has_staged_changes(&self) -> bool {
        !self
            .read(&["diff", "--cached", "--name-only"])
            .trim()
            .is_empty()
    }

    /// Stage every change in the working tree (`git add .`).
    pub fn stage_all(&self) -> Result<(), GitError> {
        run_git(&["add", "."], self.workdir()).map(|_| ())
    }

    /// Commit staged changes with the given message.
    pub fn commit(&self, message: &str) -> Result<(), GitError> {
        run_git(&["commit", "-m", message], self.workdir()).map(|_| ())
    }
}
