//! LlmClient backed by openai-client's completion endpoint.

use anyhow::Result;
use async_trait::async_trait;
use openai_client::CompletionParams;
use tracing::instrument;

use super::LlmClient;

/// Completion model used when none is configured.
pub const DEFAULT_COMPLETION_MODEL: &str = "gpt-3.5-turbo-instruct";

/// [`LlmClient`] implementation on top of [`openai_client::OpenAIClient`].
#[derive(Clone)]
pub struct OpenAILlmClient {
    client: openai_client::OpenAIClient,
    model: String,
}

impl OpenAILlmClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: openai_client::OpenAIClient::new(api_key),
            model: DEFAULT_COMPLETION_MODEL.to_string(),
        }
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: openai_client::OpenAIClient::with_base_url(api_key, base_url),
            model: DEFAULT_COMPLETION_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl LlmClient for OpenAILlmClient {
    #[instrument(skip(self, prompt), fields(model = %self.model))]
    async fn complete(&self, prompt: &str, max_tokens: u32, temperature: f32) -> Result<String> {
        self.client
            .completion(
                &self.model,
                prompt,
                CompletionParams {
                    max_tokens,
                    temperature,
                },
            )
            .await
    }
}
