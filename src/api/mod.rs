//! Programmatic request/response shapes for embedding gitscribe.
//!
//! Mirrors the command surface as serde types plus async handlers, so a host
//! process (or a future network transport) can drive the pipeline without
//! the interactive flows. Each handler is stateless; concurrent calls are
//! independent pipeline executions.

use serde::{Deserialize, Serialize};

use crate::generate::{CommitOptions, MessageWriter};

/// Service name reported by the liveness probe.
pub const SERVICE_NAME: &str = "gitscribe";

fn default_max_length() -> usize {
    50
}

fn default_style() -> String {
    "conventional".to_string()
}

/// Input for commit message generation.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitRequest {
    pub diff_text: String,
    #[serde(default = "default_max_length")]
    pub max_length: usize,
    #[serde(default = "default_style")]
    pub style: String,
}

/// Output of commit message generation.
#[derive(Debug, Clone, Serialize)]
pub struct CommitResponse {
    pub commit_message: String,
    pub confidence: f64,
    pub suggestions: Vec<String>,
}

/// Input for branch name suggestion.
#[derive(Debug, Clone, Deserialize)]
pub struct BranchRequest {
    pub diff_text: String,
    #[serde(default)]
    pub context: String,
}

/// Output of branch name suggestion.
#[derive(Debug, Clone, Serialize)]
pub struct BranchResponse {
    pub branch_name: String,
    pub alternatives: Vec<String>,
}

/// Input for PR summarization.
#[derive(Debug, Clone, Deserialize)]
pub struct PrRequest {
    pub branch_name: String,
    pub diff_text: String,
}

/// Output of PR summarization.
#[derive(Debug, Clone, Serialize)]
pub struct PrResponse {
    pub summary: String,
    pub impact: String,
    pub testing_notes: String,
}

/// Liveness probe response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// Generate a commit message from a request payload.
pub async fn generate_commit(writer: &MessageWriter<'_>, request: CommitRequest) -> CommitResponse {
    let opts = CommitOptions {
        max_length: request.max_length,
        // Unrecognized styles fall back to conventional
        style: request.style.parse().unwrap_or_default(),
    };
    let draft = writer.commit_message(&request.diff_text, &opts).await;

    CommitResponse {
        commit_message: draft.message,
        confidence: draft.confidence,
        suggestions: draft.suggestions,
    }
}

/// Suggest a branch name from a request payload.
pub async fn suggest_branch(writer: &MessageWriter<'_>, request: BranchRequest) -> BranchResponse {
    let suggestion = writer
        .branch_name(&request.diff_text, &request.context)
        .await;

    BranchResponse {
        branch_name: suggestion.primary,
        alternatives: suggestion.alternatives,
    }
}

/// Summarize a pull request from a request payload.
pub async fn summarize_pr(writer: &MessageWriter<'_>, request: PrRequest) -> PrResponse {
    let summary = writer
        .pr_summary(&request.branch_name, &request.diff_text)
        .await;

    PrResponse {
        summary: summary.summary,
        impact: summary.impact,
        testing_notes: summary.testing_notes,
    }
}

/// Liveness probe.
pub fn health() -> HealthResponse {
    HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_request_defaults() {
        let request: CommitRequest =
            serde_json::from_str(r#"{"diff_text": "+line\n"}"#).unwrap();
        assert_eq!(request.max_length, 50);
        assert_eq!(request.style, "conventional");
    }

    #[test]
    fn test_branch_request_default_context() {
        let request: BranchRequest =
            serde_json::from_str(r#"{"diff_text": "+line\n"}"#).unwrap();
        assert_eq!(request.context, "");
    }

    #[test]
    fn test_health_shape() {
        let health = health();
        assert_eq!(health.status, "healthy");
        assert_eq!(health.service, "gitscribe");

        let json = serde_json::to_value(&health).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["service"], "gitscribe");
    }

    #[test]
    fn test_commit_response_serializes_snake_case() {
        let response = CommitResponse {
            commit_message: "feat: x".to_string(),
            confidence: 0.9,
            suggestions: vec!["Fix y".to_string()],
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["commit_message"], "feat: x");
        assert_eq!(json["suggestions"][0], "Fix y");
    }
}
