//! Generation orchestration: prompt → completion → parse, with fallbacks.

use tracing::warn;

use crate::completion::CompletionService;
use crate::generate::parse::{
    parse_alternatives, parse_branch_reply, parse_commit_message, parse_pr_reply,
};
use crate::generate::prompt::{
    alternatives_request, branch_request, commit_request, pr_request,
};
use crate::generate::types::{
    BranchSuggestion, CommitDraft, CommitOptions, MessageStyle, PrSummary,
};

/// Number of alternative commit messages requested alongside the primary.
const ALTERNATIVE_COUNT: usize = 3;

/// Confidence reported for a successfully parsed commit message.
const PARSED_CONFIDENCE: f64 = 0.9;

/// Turns diff text into commit messages, branch names, and PR summaries.
///
/// Every method returns a complete, typed result: an empty diff short-circuits
/// to the "nothing to do" result without calling the service, and a failed or
/// empty completion substitutes the kind-specific fallback object wholesale.
/// No error escapes to the caller.
pub struct MessageWriter<'a> {
    service: &'a dyn CompletionService,
}

impl<'a> MessageWriter<'a> {
    pub fn new(service: &'a dyn CompletionService) -> Self {
        Self { service }
    }

    /// Generate a commit message with alternatives for the given diff.
    pub async fn commit_message(&self, diff: &str, opts: &CommitOptions) -> CommitDraft {
        if diff.trim().is_empty() {
            return CommitDraft::no_changes();
        }

        let raw = match self.service.complete(commit_request(diff, opts)).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Commit message generation failed: {}", e);
                return CommitDraft::fallback();
            }
        };

        let Some(message) = parse_commit_message(&raw, opts.max_length) else {
            warn!("Commit message reply was empty after normalization");
            return CommitDraft::fallback();
        };

        let suggestions = self.alternatives(diff, opts.style, ALTERNATIVE_COUNT).await;

        CommitDraft {
            message,
            confidence: PARSED_CONFIDENCE,
            suggestions,
        }
    }

    /// Generate alternative commit messages for the diff.
    ///
    /// A failed or empty completion yields the fixed alternative fallback
    /// list; a reply that parses to nothing yields an empty list (silent
    /// degrade, never partial entries).
    async fn alternatives(&self, diff: &str, style: MessageStyle, count: usize) -> Vec<String> {
        match self
            .service
            .complete(alternatives_request(diff, style, count))
            .await
        {
            Ok(raw) if !raw.trim().is_empty() => parse_alternatives(&raw, count),
            Ok(_) => {
                warn!("Alternatives reply was empty");
                alternatives_fallback()
            }
            Err(e) => {
                warn!("Alternatives generation failed: {}", e);
                alternatives_fallback()
            }
        }
    }

    /// Suggest a branch name with alternatives for the given diff.
    pub async fn branch_name(&self, diff: &str, context: &str) -> BranchSuggestion {
        if diff.trim().is_empty() {
            return BranchSuggestion::fallback();
        }

        match self.service.complete(branch_request(diff, context)).await {
            Ok(raw) if !raw.trim().is_empty() => {
                let (primary, alternatives) = parse_branch_reply(&raw);
                BranchSuggestion {
                    primary,
                    alternatives,
                }
            }
            Ok(_) => {
                warn!("Branch name reply was empty");
                BranchSuggestion::fallback()
            }
            Err(e) => {
                warn!("Branch name generation failed: {}", e);
                BranchSuggestion::fallback()
            }
        }
    }

    /// Summarize a pull request from its branch name and diff.
    pub async fn pr_summary(&self, branch_name: &str, diff: &str) -> PrSummary {
        if diff.trim().is_empty() {
            return PrSummary::no_changes();
        }

        match self.service.complete(pr_request(branch_name, diff)).await {
            Ok(raw) if !raw.trim().is_empty() => parse_pr_reply(&raw),
            Ok(_) => {
                warn!("PR summary reply was empty");
                PrSummary::fallback()
            }
            Err(e) => {
                warn!("PR summary generation failed: {}", e);
                PrSummary::fallback()
            }
        }
    }
}

fn alternatives_fallback() -> Vec<String> {
    vec![
        "Update files".to_string(),
        "Add changes".to_string(),
        "Modify code".to_string(),
    ]
}
