//! # OpenAI API client
//!
//! Thin wrapper around [async-openai] for text completion (the `/completions` endpoint).
//! Provides token masking for safe logging and a plain request/response API.

use async_openai::{config::OpenAIConfig, types::CreateCompletionRequestArgs, Client};
use std::sync::Arc;
use tracing;

/// Masks an API key/token for safe logging: first 7 chars + "***" + last 4 chars.
/// If length <= 11, returns "***" so no part of the key leaks.
pub fn mask_token(token: &str) -> String {
    const HEAD: usize = 7;
    const TAIL: usize = 4;
    if token.len() <= HEAD + TAIL {
        return "***".to_string();
    }
    match (token.get(..HEAD), token.get(token.len() - TAIL..)) {
        (Some(head), Some(tail)) => format!("{}***{}", head, tail),
        _ => "***".to_string(),
    }
}

/// Sampling parameters for one completion request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionParams {
    pub max_tokens: u32,
    pub temperature: f32,
}

/// OpenAI completion client. Wraps the async-openai client; keeps the API key only for masked logging.
#[derive(Clone)]
pub struct OpenAIClient {
    client: Arc<Client<OpenAIConfig>>,
    api_key_for_logging: String,
}

impl OpenAIClient {
    /// Builds a client using the given API key and the default API base URL.
    pub fn new(api_key: String) -> Self {
        let api_key_for_logging = api_key.clone();
        let config = OpenAIConfig::new().with_api_key(api_key);
        Self {
            client: Arc::new(Client::with_config(config)),
            api_key_for_logging,
        }
    }

    /// Builds a client with a custom base URL (proxies or compatible endpoints).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let api_key_for_logging = api_key.clone();
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(base_url);
        Self {
            client: Arc::new(Client::with_config(config)),
            api_key_for_logging,
        }
    }

    fn masked_key(&self) -> String {
        mask_token(&self.api_key_for_logging)
    }

    /// Sends a completion request and returns the first choice's text verbatim.
    ///
    /// `top_p` is fixed at 1 and both penalties at 0. Any API or transport error is wrapped
    /// into an error whose message carries the upstream detail.
    pub async fn completion(
        &self,
        model: &str,
        prompt: &str,
        params: CompletionParams,
    ) -> anyhow::Result<String> {
        tracing::info!(
            model = %model,
            prompt_chars = prompt.chars().count(),
            max_tokens = params.max_tokens,
            temperature = params.temperature,
            api_key = %self.masked_key(),
            "OpenAI completion request"
        );

        let request = CreateCompletionRequestArgs::default()
            .model(model)
            .prompt(prompt)
            .max_tokens(params.max_tokens)
            .temperature(params.temperature)
            .top_p(1.0)
            .frequency_penalty(0.0)
            .presence_penalty(0.0)
            .build()?;

        if let Ok(json) = serde_json::to_string(&request) {
            tracing::debug!(request_json = %json, "OpenAI completion request JSON");
        }

        let response = self
            .client
            .completions()
            .create(request)
            .await
            .map_err(|e| anyhow::anyhow!("请求 GPT 出错了，gpt api err: {}", e))?;

        tracing::debug!(response = ?response, "OpenAI completion response");
        if let Some(ref u) = response.usage {
            tracing::info!(
                prompt_tokens = u.prompt_tokens,
                completion_tokens = u.completion_tokens,
                total_tokens = u.total_tokens,
                "OpenAI completion usage"
            );
        }

        match response.choices.into_iter().next() {
            Some(choice) => Ok(choice.text),
            None => anyhow::bail!("请求 GPT 出错了，gpt api err: no choices in response"),
        }
    }
}
