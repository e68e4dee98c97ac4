//! # LLM client abstraction
//!
//! Defines the [`LlmClient`] trait (the completion seam used by the assistant handlers) and an
//! OpenAI implementation. Transport-agnostic.

use anyhow::Result;
use async_trait::async_trait;

mod openai_llm;

pub use openai_llm::{OpenAILlmClient, DEFAULT_COMPLETION_MODEL};

/// Completion interface: one prompt in, the first choice's text out.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Returns the model's continuation of `prompt` verbatim. Errors carry the upstream detail.
    async fn complete(&self, prompt: &str, max_tokens: u32, temperature: f32) -> Result<String>;
}
