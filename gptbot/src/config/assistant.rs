//! Assistant config: OpenAI access, completion parameters, reply prefix, image size.

use anyhow::Result;
use assistant_handlers::AssistantSettings;
use image_generation_client::parse_image_size;
use llm_client::DEFAULT_COMPLETION_MODEL;
use std::env;

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MAX_TOKENS: u32 = 512;
const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_IMAGE_SIZE: &str = "1024x1024";

#[derive(Debug, Clone)]
pub struct AssistantConfig {
    /// OPENAI_API_KEY
    pub openai_api_key: String,
    /// OPENAI_BASE_URL
    pub openai_base_url: String,
    /// MODEL
    pub model: String,
    /// MAX_TOKENS
    pub max_tokens: u32,
    /// TEMPERATURE
    pub temperature: f32,
    /// REPLY_PREFIX, prepended on its own line to every text reply
    pub reply_prefix: String,
    /// IMAGE_SIZE
    pub image_size: String,
}

impl AssistantConfig {
    /// Loads from env. OPENAI_API_KEY is required; unparsable numbers fall back to defaults.
    pub fn from_env() -> Result<Self> {
        let openai_api_key =
            env::var("OPENAI_API_KEY").map_err(|_| anyhow::anyhow!("OPENAI_API_KEY not set"))?;
        let openai_base_url =
            env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string());
        let model = env::var("MODEL").unwrap_or_else(|_| DEFAULT_COMPLETION_MODEL.to_string());
        let max_tokens = env::var("MAX_TOKENS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_MAX_TOKENS);
        let temperature = env::var("TEMPERATURE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TEMPERATURE);
        let reply_prefix = env::var("REPLY_PREFIX").unwrap_or_default();
        let image_size =
            env::var("IMAGE_SIZE").unwrap_or_else(|_| DEFAULT_IMAGE_SIZE.to_string());

        Ok(Self {
            openai_api_key,
            openai_base_url,
            model,
            max_tokens,
            temperature,
            reply_prefix,
            image_size,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.openai_api_key.trim().is_empty() {
            anyhow::bail!("OPENAI_API_KEY is empty");
        }
        if reqwest::Url::parse(&self.openai_base_url).is_err() {
            anyhow::bail!("OPENAI_BASE_URL is not a valid URL: {}", self.openai_base_url);
        }
        if self.max_tokens == 0 {
            anyhow::bail!("MAX_TOKENS must be greater than 0");
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            anyhow::bail!("TEMPERATURE must be within 0.0..=2.0, got {}", self.temperature);
        }
        if parse_image_size(&self.image_size).is_none() {
            anyhow::bail!(
                "IMAGE_SIZE must be one of 256x256, 512x512, 1024x1024, got {}",
                self.image_size
            );
        }
        Ok(())
    }

    /// Handler-side view of this config.
    pub fn settings(&self) -> AssistantSettings {
        AssistantSettings {
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            reply_prefix: self.reply_prefix.clone(),
        }
    }
}
