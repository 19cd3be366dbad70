//! Text-completion service abstraction and OpenAI-backed implementation.

pub mod openai;
pub mod retry;

use async_trait::async_trait;

use crate::error::CompletionError;

pub use openai::OpenAiClient;

/// A single completion request: system instruction, user prompt, and the
/// sampling limits fixed per request kind by the prompt builder.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system: String,
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// The text-generation capability.
///
/// Implementations must never panic; every failure surfaces as a
/// [`CompletionError`] which callers convert into a documented fallback
/// result.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError>;
}
