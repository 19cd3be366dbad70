//! Result types for the generation pipeline.

use std::fmt;
use std::str::FromStr;

/// Commit message style requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageStyle {
    #[default]
    Conventional,
    Detailed,
    Brief,
}

impl MessageStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageStyle::Conventional => "conventional",
            MessageStyle::Detailed => "detailed",
            MessageStyle::Brief => "brief",
        }
    }
}

impl FromStr for MessageStyle {
    type Err = std::convert::Infallible;

    /// Unrecognized styles fall back to conventional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "detailed" => MessageStyle::Detailed,
            "brief" => MessageStyle::Brief,
            _ => MessageStyle::Conventional,
        })
    }
}

impl fmt::Display for MessageStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for commit message generation.
#[derive(Debug, Clone)]
pub struct CommitOptions {
    /// Hard upper bound on the generated message length.
    pub max_length: usize,
    pub style: MessageStyle,
}

impl Default for CommitOptions {
    fn default() -> Self {
        Self {
            max_length: 50,
            style: MessageStyle::Conventional,
        }
    }
}

/// A generated commit message with alternatives.
#[derive(Debug, Clone, PartialEq)]
pub struct CommitDraft {
    pub message: String,
    /// Confidence in the primary message, in `[0, 1]`. Zero on fallback.
    pub confidence: f64,
    pub suggestions: Vec<String>,
}

impl CommitDraft {
    /// Result for an empty diff: nothing to do, no service call made.
    pub(crate) fn no_changes() -> Self {
        Self {
            message: "No changes detected".to_string(),
            confidence: 0.0,
            suggestions: Vec::new(),
        }
    }

    /// Wholesale fallback when generation fails or returns nothing usable.
    pub(crate) fn fallback() -> Self {
        Self {
            message: "Update project files".to_string(),
            confidence: 0.0,
            suggestions: vec![
                "Add new feature".to_string(),
                "Fix bug".to_string(),
                "Update documentation".to_string(),
            ],
        }
    }
}

/// A suggested branch name with alternatives.
///
/// Every field matches the charset `[a-z0-9/-]`.
#[derive(Debug, Clone, PartialEq)]
pub struct BranchSuggestion {
    pub primary: String,
    pub alternatives: Vec<String>,
}

impl BranchSuggestion {
    /// Fallback for an empty diff or a failed generation call. The literals
    /// are identical for both paths.
    pub(crate) fn fallback() -> Self {
        Self {
            primary: "feature/new-changes".to_string(),
            alternatives: vec![
                "feature/updates".to_string(),
                "feature/modifications".to_string(),
            ],
        }
    }
}

/// A pull-request summary triple.
#[derive(Debug, Clone, PartialEq)]
pub struct PrSummary {
    pub summary: String,
    /// By convention High/Medium/Low, but the set is open.
    pub impact: String,
    pub testing_notes: String,
}

impl PrSummary {
    /// Result for an empty diff: nothing to summarize.
    pub(crate) fn no_changes() -> Self {
        Self {
            summary: "No changes to summarize".to_string(),
            impact: "Minimal".to_string(),
            testing_notes: "No specific testing required".to_string(),
        }
    }

    /// Wholesale fallback when generation fails or returns nothing usable.
    pub(crate) fn fallback() -> Self {
        Self {
            summary: "Pull request contains code changes".to_string(),
            impact: "Medium".to_string(),
            testing_notes: "Review changes before merging".to_string(),
        }
    }

    /// Canonical text form, parseable back into the same three fields.
    pub fn to_text(&self) -> String {
        format!(
            "Summary: {}\nImpact: {}\nTesting: {}",
            self.summary, self.impact, self.testing_notes
        )
    }
}
