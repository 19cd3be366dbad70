//! Commit message, branch name, and PR summary generation.

pub mod parse;
pub mod prompt;
pub mod types;
pub mod writer;

pub use parse::{
    ALTERNATIVE_MAX_LENGTH, normalize_branch_name, parse_alternatives, parse_branch_reply,
    parse_commit_message, parse_pr_reply,
};
pub use prompt::{ALTERNATIVES_DIFF_BUDGET, TRUNCATION_MARKER};
pub use types::{BranchSuggestion, CommitDraft, CommitOptions, MessageStyle, PrSummary};
pub use writer::MessageWriter;
