//! Credential sourcing and completion-service configuration.

use std::env;
use std::path::Path;

use tracing::warn;

use crate::error::CompletionError;

/// Environment variable holding the completion-service credential.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Environment variable to override the model identifier.
pub const MODEL_ENV: &str = "GITSCRIBE_MODEL";

/// Environment variable to override the completion API base URL.
pub const BASE_URL_ENV: &str = "GITSCRIBE_BASE_URL";

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Resolved configuration for the completion client.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    pub base_url: String,
    pub model: String,
    pub api_key: String,
}

impl CompletionConfig {
    /// Resolve configuration from the environment and an optional credential
    /// override (the `--api-key` flag).
    ///
    /// Credential precedence: CLI override, then the `OPENAI_API_KEY`
    /// environment variable, then an `OPENAI_API_KEY=<key>` line in a local
    /// `.env` file. Absence is a hard error: every command requires the
    /// credential before touching the repository.
    pub fn resolve(api_key_override: Option<String>) -> Result<Self, CompletionError> {
        let api_key = api_key_override
            .filter(|k| !k.trim().is_empty())
            .or_else(|| env_non_empty(API_KEY_ENV))
            .or_else(|| read_dotfile_key(Path::new(".env"), API_KEY_ENV))
            .ok_or(CompletionError::MissingApiKey)?;

        Ok(Self {
            base_url: env_non_empty(BASE_URL_ENV)
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: env_non_empty(MODEL_ENV).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_key,
        })
    }
}

/// Read an environment variable, treating empty values as unset.
fn env_non_empty(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(v) if !v.trim().is_empty() => Some(v),
        _ => None,
    }
}

/// Look up `key` in a dotfile of `KEY=value` lines.
///
/// Lines starting with `#` are skipped; a matching value may be wrapped in
/// single or double quotes. A missing file is not an error.
fn read_dotfile_key(path: &Path, key: &str) -> Option<String> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            return None;
        }
    };

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((name, value)) = line.split_once('=')
            && name.trim() == key
        {
            let value = value.trim().trim_matches('"').trim_matches('\'');
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }

    None
}
