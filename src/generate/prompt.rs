//! Prompt construction for the completion service.
//!
//! Each builder is a pure function from the request inputs to a
//! [`CompletionRequest`]; the sampling limits are fixed per request kind.

use crate::completion::CompletionRequest;
use crate::generate::types::{CommitOptions, MessageStyle};

/// Sampling temperatures: deterministic-leaning for commit/PR text, more
/// varied for name and alternative generation.
pub const COMMIT_TEMPERATURE: f32 = 0.3;
pub const ALTERNATIVES_TEMPERATURE: f32 = 0.5;
pub const BRANCH_TEMPERATURE: f32 = 0.4;
pub const PR_TEMPERATURE: f32 = 0.3;

const COMMIT_MAX_TOKENS: u32 = 100;
const ALTERNATIVES_MAX_TOKENS: u32 = 150;
const BRANCH_MAX_TOKENS: u32 = 100;
const PR_MAX_TOKENS: u32 = 200;

/// Character budget for the diff embedded in the alternatives prompt.
/// A cost/latency control, not a correctness bound.
pub const ALTERNATIVES_DIFF_BUDGET: usize = 1000;

/// Marker appended when the embedded diff is cut at the budget.
pub const TRUNCATION_MARKER: &str = "... (truncated)";

impl MessageStyle {
    /// The style-specific instruction line embedded in commit prompts.
    fn instruction(&self, max_length: usize) -> String {
        match self {
            MessageStyle::Conventional => format!(
                "Write a conventional commit message (type: description). Keep it under {max_length} characters."
            ),
            MessageStyle::Detailed => format!(
                "Write a detailed commit message explaining the changes comprehensively. Keep it under {max_length} characters."
            ),
            MessageStyle::Brief => {
                format!("Write a brief, concise commit message. Keep it under {max_length} characters.")
            }
        }
    }
}

/// Build the completion request for the primary commit message.
pub fn commit_request(diff: &str, opts: &CommitOptions) -> CompletionRequest {
    let prompt = format!(
        r#"Analyze this Git diff and create a commit message following these guidelines:
- {style_instruction}
- Focus on what changed and why
- Use imperative mood (e.g., "Add", "Fix", "Update")
- Be specific but concise
- First line should be the main summary

Git diff:
{diff}

Return only the commit message, nothing else."#,
        style_instruction = opts.style.instruction(opts.max_length),
    );

    CompletionRequest {
        system: "You are an expert developer who writes clear, concise Git commit messages."
            .to_string(),
        prompt,
        max_tokens: COMMIT_MAX_TOKENS,
        temperature: COMMIT_TEMPERATURE,
    }
}

/// Build the completion request for alternative commit messages.
///
/// The diff is cut at [`ALTERNATIVES_DIFF_BUDGET`] characters with
/// [`TRUNCATION_MARKER`] appended, keeping this secondary call cheap.
pub fn alternatives_request(diff: &str, style: MessageStyle, count: usize) -> CompletionRequest {
    let prompt = format!(
        r#"Generate {count} alternative commit messages for this diff.
Style: {style}
Keep each under 50 characters.
Return as a numbered list.

Diff:
{diff}"#,
        diff = truncate_diff(diff, ALTERNATIVES_DIFF_BUDGET),
    );

    CompletionRequest {
        system: "Generate concise commit message alternatives.".to_string(),
        prompt,
        max_tokens: ALTERNATIVES_MAX_TOKENS,
        temperature: ALTERNATIVES_TEMPERATURE,
    }
}

/// Build the completion request for branch name suggestions.
pub fn branch_request(diff: &str, context: &str) -> CompletionRequest {
    let prompt = format!(
        r#"Analyze this Git diff and suggest a branch name following these conventions:
- Use format: type/short-description (e.g., feature/user-auth, fix/login-bug, refactor/api-endpoints)
- Keep it under 30 characters
- Use hyphens for spaces
- Be descriptive but concise

Context: {context}

Git diff:
{diff}

Suggest one primary branch name and 2-3 alternatives.
Return format:
Primary: branch-name
Alternatives: alt1, alt2, alt3"#,
    );

    CompletionRequest {
        system: "You are an expert at naming Git branches based on code changes.".to_string(),
        prompt,
        max_tokens: BRANCH_MAX_TOKENS,
        temperature: BRANCH_TEMPERATURE,
    }
}

/// Build the completion request for a pull-request summary.
pub fn pr_request(branch_name: &str, diff: &str) -> CompletionRequest {
    let prompt = format!(
        r#"Analyze this Git diff for a pull request and provide:

1. A clear summary of the changes (2-3 sentences)
2. The impact level (High/Medium/Low)
3. Testing considerations

Branch: {branch_name}

Git diff:
{diff}

Format your response as:
Summary: [summary text]
Impact: [High/Medium/Low]
Testing: [testing notes]"#,
    );

    CompletionRequest {
        system: "You are a senior developer reviewing pull requests.".to_string(),
        prompt,
        max_tokens: PR_MAX_TOKENS,
        temperature: PR_TEMPERATURE,
    }
}

/// Cut `diff` at `budget` characters and append the truncation marker.
///
/// The cut is measured in characters, not bytes, so multi-byte input never
/// splits a codepoint.
fn truncate_diff(diff: &str, budget: usize) -> String {
    if diff.chars().count() <= budget {
        return diff.to_string();
    }

    let cut: String = diff.chars().take(budget).collect();
    format!("{cut}{TRUNCATION_MARKER}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_request_embeds_diff_and_style() {
        let opts = CommitOptions::default();
        let req = commit_request("+fn new() {}\n", &opts);

        assert!(req.prompt.contains("+fn new() {}"));
        assert!(req.prompt.contains("conventional commit message"));
        assert!(req.prompt.contains("under 50 characters"));
        assert!(req.prompt.contains("imperative mood"));
        assert_eq!(req.temperature, COMMIT_TEMPERATURE);
        assert_eq!(req.max_tokens, COMMIT_MAX_TOKENS);
    }

    #[test]
    fn test_commit_request_embeds_max_length() {
        let opts = CommitOptions {
            max_length: 72,
            style: MessageStyle::Brief,
        };
        let req = commit_request("+x\n", &opts);
        assert!(req.prompt.contains("under 72 characters"));
        assert!(req.prompt.contains("brief, concise"));
    }

    #[test]
    fn test_alternatives_request_truncates_long_diff() {
        let diff = "a".repeat(ALTERNATIVES_DIFF_BUDGET + 500);
        let req = alternatives_request(&diff, MessageStyle::Conventional, 3);

        assert!(req.prompt.contains(TRUNCATION_MARKER));
        // The embedded diff is exactly the budget plus the marker
        let embedded = format!("{}{}", "a".repeat(ALTERNATIVES_DIFF_BUDGET), TRUNCATION_MARKER);
        assert!(req.prompt.contains(&embedded));
        assert!(!req.prompt.contains(&"a".repeat(ALTERNATIVES_DIFF_BUDGET + 1)));
    }

    #[test]
    fn test_alternatives_request_short_diff_untouched() {
        let req = alternatives_request("+one line\n", MessageStyle::Detailed, 3);
        assert!(req.prompt.contains("+one line"));
        assert!(!req.prompt.contains(TRUNCATION_MARKER));
        assert_eq!(req.temperature, ALTERNATIVES_TEMPERATURE);
    }

    #[test]
    fn test_truncate_diff_is_char_boundary_safe() {
        let diff = "é".repeat(ALTERNATIVES_DIFF_BUDGET + 10);
        let cut = truncate_diff(&diff, ALTERNATIVES_DIFF_BUDGET);
        assert!(cut.starts_with('é'));
        assert!(cut.ends_with(TRUNCATION_MARKER));
        assert_eq!(
            cut.chars().count(),
            ALTERNATIVES_DIFF_BUDGET + TRUNCATION_MARKER.chars().count()
        );
    }

    #[test]
    fn test_branch_request_embeds_context_and_format() {
        let req = branch_request("+change\n", "Current branch: main");

        assert!(req.prompt.contains("Current branch: main"));
        assert!(req.prompt.contains("Primary: branch-name"));
        assert!(req.prompt.contains("Alternatives: alt1, alt2, alt3"));
        assert!(req.prompt.contains("under 30 characters"));
        assert_eq!(req.temperature, BRANCH_TEMPERATURE);
    }

    #[test]
    fn test_pr_request_references_branch() {
        let req = pr_request("feature/login", "+auth code\n");

        assert!(req.prompt.contains("Branch: feature/login"));
        assert!(req.prompt.contains("Summary: [summary text]"));
        assert!(req.prompt.contains("Impact: [High/Medium/Low]"));
        assert!(req.prompt.contains("Testing: [testing notes]"));
        assert_eq!(req.temperature, PR_TEMPERATURE);
        assert_eq!(req.max_tokens, 200);
    }
}
