//! Interactive session flows.
//!
//! Each flow is one linear pipeline execution: check the repository, collect
//! a diff, generate, present, act. User interaction goes through the
//! injectable [`UserPrompt`] trait so flows stay testable without a terminal.

pub mod branch;
pub mod commit;
pub mod pr;

use dialoguer::{Confirm, Input};
use tracing::debug;

pub use commit::CommitOutcome;

/// The user's decision on a presented commit message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Commit with the generated message.
    Accept,
    /// Replace the message, then commit.
    Edit,
    /// Abort without committing.
    Quit,
}

/// Terminal interaction used by the flows.
pub trait UserPrompt {
    /// Ask a yes/no question.
    fn confirm(&self, message: &str) -> bool;

    /// Ask what to do with the suggested commit message.
    fn decide(&self) -> Decision;

    /// Read a replacement commit message.
    fn replacement_message(&self) -> String;
}

/// [`UserPrompt`] backed by dialoguer.
///
/// Prompt failures (closed stdin, interrupt) degrade to the safe answer:
/// decline, quit, or an empty string.
pub struct TerminalPrompt;

impl UserPrompt for TerminalPrompt {
    fn confirm(&self, message: &str) -> bool {
        Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact()
            .unwrap_or(false)
    }

    fn decide(&self) -> Decision {
        let answer: String = match Input::new()
            .with_prompt("Use this message? (y = yes, e = edit, q = quit)")
            .allow_empty(true)
            .interact_text()
        {
            Ok(text) => text,
            Err(e) => {
                debug!("Prompt failed: {}", e);
                return Decision::Quit;
            }
        };

        match answer.trim().to_lowercase().as_str() {
            "y" | "yes" => Decision::Accept,
            "e" | "edit" => Decision::Edit,
            _ => Decision::Quit,
        }
    }

    fn replacement_message(&self) -> String {
        Input::new()
            .with_prompt("Enter your commit message")
            .allow_empty(true)
            .interact_text()
            .unwrap_or_default()
    }
}
