//! Shared test utilities for integration tests.
//!
//! Not all helpers are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;

use gitscribe::clipboard::Clipboard;
use gitscribe::completion::{CompletionRequest, CompletionService};
use gitscribe::error::CompletionError;
use gitscribe::flow::{Decision, UserPrompt};
use gitscribe::git::{GitRepo, run_git};

/// A completion service that replays a scripted sequence of replies.
///
/// Each `complete` call pops the next reply; an exhausted script returns
/// [`CompletionError::EmptyReply`]. Requests are recorded for assertions.
pub struct ScriptedCompletion {
    replies: Mutex<VecDeque<Result<String, CompletionError>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedCompletion {
    pub fn new(replies: Vec<Result<String, CompletionError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// A service where every call fails.
    pub fn always_failing() -> Self {
        Self::new(Vec::new())
    }

    /// Number of completion calls made so far.
    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Requests seen so far, in order.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionService for ScriptedCompletion {
    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError> {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(CompletionError::EmptyReply))
    }
}

/// A prompt with fixed, scripted answers.
pub struct ScriptedPrompt {
    pub confirm_answer: bool,
    pub decision: Decision,
    pub replacement: String,
}

impl ScriptedPrompt {
    pub fn accepting() -> Self {
        Self {
            confirm_answer: true,
            decision: Decision::Accept,
            replacement: String::new(),
        }
    }

    pub fn editing(replacement: &str) -> Self {
        Self {
            confirm_answer: true,
            decision: Decision::Edit,
            replacement: replacement.to_string(),
        }
    }

    pub fn quitting() -> Self {
        Self {
            confirm_answer: false,
            decision: Decision::Quit,
            replacement: String::new(),
        }
    }
}

impl UserPrompt for ScriptedPrompt {
    fn confirm(&self, _message: &str) -> bool {
        self.confirm_answer
    }

    fn decide(&self) -> Decision {
        self.decision
    }

    fn replacement_message(&self) -> String {
        self.replacement.clone()
    }
}

/// A clipboard that records copies instead of touching the system.
#[derive(Default)]
pub struct RecordingClipboard {
    copies: Mutex<Vec<String>>,
}

impl RecordingClipboard {
    pub fn copies(&self) -> Vec<String> {
        self.copies.lock().unwrap().clone()
    }
}

impl Clipboard for RecordingClipboard {
    fn copy(&self, text: &str) -> bool {
        self.copies.lock().unwrap().push(text.to_string());
        true
    }
}

/// A clipboard standing in for a host with no clipboard utility.
pub struct AbsentClipboard;

impl Clipboard for AbsentClipboard {
    fn copy(&self, _text: &str) -> bool {
        false
    }
}

/// A scratch git repository driven through the system git binary.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
}

impl TestRepo {
    /// Create a repository with an initial commit so HEAD exists.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Self { dir };
        repo.git(&["init"]);
        repo.git(&["config", "user.name", "Test User"]);
        repo.git(&["config", "user.email", "test@example.com"]);
        repo.write_file("README.md", "# test\n");
        repo.git(&["add", "."]);
        repo.git(&["commit", "-m", "init"]);
        repo
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// A [`GitRepo`] handle rooted at this repository.
    pub fn handle(&self) -> GitRepo {
        GitRepo::at(self.path())
    }

    pub fn write_file(&self, name: &str, content: &str) {
        std::fs::write(self.path().join(name), content).expect("Failed to write file");
    }

    /// Run git in this repository, panicking on failure.
    pub fn git(&self, args: &[&str]) -> String {
        run_git(args, Some(self.path()))
            .unwrap_or_else(|e| panic!("git {:?} failed: {}", args, e))
    }

    /// Number of commits on HEAD.
    pub fn commit_count(&self) -> usize {
        self.git(&["rev-list", "--count", "HEAD"])
            .parse()
            .expect("Failed to parse commit count")
    }

    /// Subject line of the HEAD commit.
    pub fn head_subject(&self) -> String {
        self.git(&["log", "-1", "--format=%s"])
    }
}
