//! Interactive commit flow: stage → generate → confirm → commit.

use crate::error::FlowError;
use crate::flow::{Decision, UserPrompt};
use crate::generate::{CommitOptions, MessageWriter};
use crate::git::GitRepo;

/// Terminal states of the commit flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Exactly one commit was created with this message.
    Committed { message: String },
    /// No side effect.
    Aborted,
}

/// Run the interactive commit flow.
///
/// Generation itself cannot abort the flow: a failed completion still yields
/// a usable fallback draft. Aborts come only from the repository checks and
/// the user's decision; the one error a decision can produce is an empty
/// replacement message.
pub async fn run(
    repo: &GitRepo,
    writer: &MessageWriter<'_>,
    prompt: &dyn UserPrompt,
) -> Result<CommitOutcome, FlowError> {
    if !repo.is_repository() {
        println!("Not a git repository. Run gitscribe from within a git repository.");
        return Ok(CommitOutcome::Aborted);
    }

    if !repo.has_staged_changes() {
        println!("No staged changes found.");
        if !prompt.confirm("Stage all changes?") {
            println!("Stage your changes with 'git add' and try again.");
            return Ok(CommitOutcome::Aborted);
        }
        repo.stage_all().map_err(FlowError::StageFailed)?;
        println!("Changes staged.");
    }

    let diff = repo.staged_diff();
    if diff.trim().is_empty() {
        println!("Nothing to commit.");
        return Ok(CommitOutcome::Aborted);
    }

    println!("Analyzing staged changes...");
    let draft = writer.commit_message(&diff, &CommitOptions::default()).await;

    println!();
    println!("Suggested commit message:");
    println!("  {}", draft.message);

    if !draft.suggestions.is_empty() {
        println!();
        println!("Alternatives:");
        for (i, alt) in draft.suggestions.iter().take(3).enumerate() {
            println!("  {}. {}", i + 1, alt);
        }
    }
    println!();

    match prompt.decide() {
        Decision::Accept => {
            repo.commit(&draft.message).map_err(FlowError::CommitFailed)?;
            println!("Changes committed: {}", draft.message);
            Ok(CommitOutcome::Committed {
                message: draft.message,
            })
        }
        Decision::Edit => {
            let replacement = prompt.replacement_message().trim().to_string();
            if replacement.is_empty() {
                return Err(FlowError::EmptyMessage);
            }
            repo.commit(&replacement).map_err(FlowError::CommitFailed)?;
            println!("Changes committed: {}", replacement);
            Ok(CommitOutcome::Committed {
                message: replacement,
            })
        }
        Decision::Quit => {
            println!("Commit cancelled.");
            Ok(CommitOutcome::Aborted)
        }
    }
}
