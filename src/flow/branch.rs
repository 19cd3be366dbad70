//! Branch suggestion flow: a linear diff → generate → present pipeline.

use crate::clipboard::Clipboard;
use crate::generate::{BranchSuggestion, MessageWriter};
use crate::git::GitRepo;

/// Suggest branch names for the current working-tree changes.
///
/// Returns the suggestion when one was produced, `None` when the flow
/// aborted (not a repository, nothing to analyze).
pub async fn run(
    repo: &GitRepo,
    writer: &MessageWriter<'_>,
    clipboard: &dyn Clipboard,
) -> Option<BranchSuggestion> {
    if !repo.is_repository() {
        println!("Not a git repository. Run gitscribe from within a git repository.");
        return None;
    }

    let diff = repo.diff_against_head();
    if diff.trim().is_empty() {
        println!("No changes found to analyze.");
        return None;
    }

    println!("Analyzing changes for a branch name...");

    let current = repo.current_branch();
    let context = if current.is_empty() {
        String::new()
    } else {
        format!("Current branch: {current}")
    };

    let suggestion = writer.branch_name(&diff, &context).await;

    println!();
    println!("Suggested branch names:");
    println!("  Primary: {}", suggestion.primary);
    if !suggestion.alternatives.is_empty() {
        println!("  Alternatives:");
        for (i, alt) in suggestion.alternatives.iter().enumerate() {
            println!("    {}. {}", i + 1, alt);
        }
    }

    // Best-effort side channel; absence of a clipboard is not an error
    if clipboard.copy(&suggestion.primary) {
        println!();
        println!("Copied '{}' to clipboard.", suggestion.primary);
    }

    Some(suggestion)
}
