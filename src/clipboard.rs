//! Best-effort system clipboard capability.
//!
//! Copying is an optional side channel of the branch and PR flows: when no
//! clipboard utility is available the capability is a no-op, never an error.

use std::io::Write;
use std::process::{Command, Stdio};

use tracing::debug;

/// An injectable clipboard capability.
pub trait Clipboard {
    /// Copy `text`, returning whether the copy actually happened.
    fn copy(&self, text: &str) -> bool;
}

/// Clipboard utilities probed for, in order, with their argument vectors.
const CANDIDATES: &[(&str, &[&str])] = &[
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
];

/// Clipboard backed by whichever system utility is on PATH.
pub struct SystemClipboard {
    command: Option<(&'static str, &'static [&'static str])>,
}

impl SystemClipboard {
    /// Probe for a clipboard utility. Finding none is fine: copies become
    /// no-ops.
    pub fn detect() -> Self {
        let command = CANDIDATES
            .iter()
            .find(|candidate| which::which(candidate.0).is_ok())
            .copied();

        if command.is_none() {
            debug!("No clipboard utility found; copy is disabled");
        }

        Self { command }
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&self, text: &str) -> bool {
        let Some((bin, args)) = self.command else {
            return false;
        };

        let child = Command::new(bin)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match child {
            Ok(mut child) => {
                if let Some(mut stdin) = child.stdin.take()
                    && stdin.write_all(text.as_bytes()).is_err()
                {
                    return false;
                }
                child.wait().map(|status| status.success()).unwrap_or(false)
            }
            Err(e) => {
                debug!("Clipboard copy via {} failed: {}", bin, e);
                false
            }
        }
    }
}
