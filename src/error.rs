//! Error types for gitscribe modules using thiserror.

use thiserror::Error;

/// Errors from git subprocess operations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git executable not found. Install git and ensure it is on PATH")]
    NotInstalled,

    #[error("Failed to spawn git: {0}")]
    SpawnFailed(#[source] std::io::Error),

    #[error("git exited with code {code}: {stderr}")]
    NonZeroExit { code: i32, stderr: String },
}

/// Errors from the text-completion service.
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error(
        "OpenAI API key not found. Set the OPENAI_API_KEY environment variable or add OPENAI_API_KEY=<key> to a local .env file"
    )]
    MissingApiKey,

    #[error("Completion request failed: {0}")]
    Http(#[source] reqwest::Error),

    #[error("Completion service returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Completion service returned an empty reply")]
    EmptyReply,

    #[error("All retry attempts failed: {0}")]
    RetriesExhausted(#[source] Box<CompletionError>),
}

/// Errors from the interactive session flows.
#[derive(Error, Debug)]
pub enum FlowError {
    #[error("Commit message cannot be empty")]
    EmptyMessage,

    #[error("Failed to stage changes: {0}")]
    StageFailed(#[source] GitError),

    #[error("Failed to create commit: {0}")]
    CommitFailed(#[source] GitError),
}
