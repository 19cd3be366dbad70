//! Reply parsing: the contract between free-text completions and typed results.
//!
//! The upstream reply carries no schema guarantee, so every parser here is a
//! literal pattern contract with defined fallback behavior. A reply that does
//! not match degrades per field to its pre-declared default; total generation
//! failure is handled one level up in the writer, which substitutes the
//! kind-specific fallback object wholesale.

use regex_lite::Regex;

use crate::generate::types::PrSummary;

/// Upper bound on each alternative commit message.
pub const ALTERNATIVE_MAX_LENGTH: usize = 50;

/// Parse-level fallback branch values, used when the reply has neither a
/// `primary:` nor an `alternatives:` line. Distinct from the generation
/// fallback in [`crate::generate::types::BranchSuggestion::fallback`].
const BRANCH_PARSE_FALLBACK: &str = "feature/new-feature";
const BRANCH_PARSE_FALLBACK_ALTERNATIVES: [&str; 2] = ["feature/alt1", "feature/alt2"];

/// Extract a commit message from a raw reply.
///
/// Strips one leading and one trailing quote character (single or double),
/// trims, and enforces `max_length`: an overlong candidate is cut to
/// `max_length - 3` characters with `...` appended, so the result never
/// exceeds `max_length`. Returns `None` when nothing remains: the caller
/// treats that as a failed generation.
pub fn parse_commit_message(raw: &str, max_length: usize) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let unquoted = trimmed.strip_prefix(['"', '\'']).unwrap_or(trimmed);
    let unquoted = unquoted.strip_suffix(['"', '\'']).unwrap_or(unquoted).trim();

    if unquoted.is_empty() {
        return None;
    }

    if unquoted.chars().count() > max_length {
        let cut: String = unquoted.chars().take(max_length.saturating_sub(3)).collect();
        return Some(format!("{cut}..."));
    }

    Some(unquoted.to_string())
}

/// Parse a numbered-list reply into alternative commit messages.
///
/// Strips a leading ordinal marker (digits, optional period, optional
/// whitespace: the `1) ` list form is not recognized), trims, and keeps
/// lines that are non-empty and at most [`ALTERNATIVE_MAX_LENGTH`]
/// characters. Failing lines are dropped silently; up to `count` survivors
/// are returned in source order.
pub fn parse_alternatives(raw: &str, count: usize) -> Vec<String> {
    let ordinal = Regex::new(r"^\d+\.?\s*").unwrap();

    raw.lines()
        .map(|line| ordinal.replace(line, "").trim().to_string())
        .filter(|line| !line.is_empty() && line.chars().count() <= ALTERNATIVE_MAX_LENGTH)
        .take(count)
        .collect()
}

/// Parse a branch-name reply into (primary, alternatives).
///
/// Scans lines case-insensitively for `primary:` and `alternatives:`
/// prefixes; the first matching line per prefix wins. The primary value is
/// everything after the first colon, trimmed; alternatives are comma-split,
/// trimmed, empties dropped, capped at 3. When neither structural line is
/// present both fields take the parse-level fallback. Every value, fallback
/// included, passes through [`normalize_branch_name`].
pub fn parse_branch_reply(raw: &str) -> (String, Vec<String>) {
    let mut primary: Option<String> = None;
    let mut alternatives: Option<Vec<String>> = None;

    for line in raw.lines() {
        let lower = line.to_lowercase();
        if primary.is_none() && lower.starts_with("primary:") {
            primary = line.split_once(':').map(|(_, rest)| rest.trim().to_string());
        } else if alternatives.is_none() && lower.starts_with("alternatives:") {
            alternatives = line.split_once(':').map(|(_, rest)| {
                rest.split(',')
                    .map(str::trim)
                    .filter(|alt| !alt.is_empty())
                    .take(3)
                    .map(String::from)
                    .collect()
            });
        }
    }

    let primary = primary.unwrap_or_else(|| BRANCH_PARSE_FALLBACK.to_string());
    let alternatives = alternatives.unwrap_or_else(|| {
        BRANCH_PARSE_FALLBACK_ALTERNATIVES
            .iter()
            .map(|s| s.to_string())
            .collect()
    });

    (
        normalize_branch_name(&primary),
        alternatives
            .iter()
            .map(|alt| normalize_branch_name(alt))
            .collect(),
    )
}

/// Normalize a branch name to the `[a-z0-9/-]` charset.
///
/// Lowercases, then maps every character outside the charset to one hyphen.
pub fn normalize_branch_name(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '/' || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

/// Parse a pull-request summary reply.
///
/// Scans lines for the case-sensitive prefixes `Summary:`, `Impact:` and
/// `Testing:`; the value is everything after the prefix, trimmed. Only the
/// first matching line per prefix is used; a field with no matching line
/// keeps its default.
pub fn parse_pr_reply(raw: &str) -> PrSummary {
    let mut summary: Option<String> = None;
    let mut impact: Option<String> = None;
    let mut testing_notes: Option<String> = None;

    for line in raw.lines() {
        if summary.is_none()
            && let Some(rest) = line.strip_prefix("Summary:")
        {
            summary = Some(rest.trim().to_string());
        } else if impact.is_none()
            && let Some(rest) = line.strip_prefix("Impact:")
        {
            impact = Some(rest.trim().to_string());
        } else if testing_notes.is_none()
            && let Some(rest) = line.strip_prefix("Testing:")
        {
            testing_notes = Some(rest.trim().to_string());
        }
    }

    PrSummary {
        summary: summary.unwrap_or_else(|| "Changes made to the codebase".to_string()),
        impact: impact.unwrap_or_else(|| "Medium".to_string()),
        testing_notes: testing_notes
            .unwrap_or_else(|| "Standard testing procedures apply".to_string()),
    }
}
