//! PR summary flow: a linear diff → generate → present pipeline.

use crate::clipboard::Clipboard;
use crate::generate::{MessageWriter, PrSummary};
use crate::git::GitRepo;

/// Summarize the current branch's changes as a pull-request description.
///
/// Returns the summary when one was produced, `None` when the flow aborted.
pub async fn run(
    repo: &GitRepo,
    writer: &MessageWriter<'_>,
    clipboard: &dyn Clipboard,
) -> Option<PrSummary> {
    if !repo.is_repository() {
        println!("Not a git repository. Run gitscribe from within a git repository.");
        return None;
    }

    let branch = repo.current_branch();
    if branch.is_empty() {
        println!("Could not determine the current branch.");
        return None;
    }

    let diff = repo.diff_against_head();
    if diff.trim().is_empty() {
        println!("No changes found to summarize.");
        return None;
    }

    println!("Analyzing branch '{branch}'...");

    let summary = writer.pr_summary(&branch, &diff).await;

    println!();
    println!("Pull request summary:");
    println!("  Summary: {}", summary.summary);
    println!("  Impact: {}", summary.impact);
    println!("  Testing notes: {}", summary.testing_notes);

    if clipboard.copy(&summary.to_text()) {
        println!();
        println!("Summary copied to clipboard.");
    }

    Some(summary)
}
