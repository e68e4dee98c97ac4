//! OpenAI image generation client.
//!
//! Calls the images endpoint and normalizes every result to raw image bytes: base64 payloads
//! are decoded, URL payloads are downloaded. A batch either succeeds completely or fails.

use anyhow::{Context, Result};
use async_openai::{
    config::OpenAIConfig,
    types::{CreateImageRequestArgs, Image, ImageResponseFormat, ImageSize},
    Client,
};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use std::sync::Arc;
use tracing;

/// Image generation seam used by the assistant handlers.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generates `count` images for `description`. Each buffer is a self-contained encoded image,
    /// returned in upstream order.
    async fn generate_images(&self, description: &str, count: u8) -> Result<Vec<Vec<u8>>>;
}

/// Parses `256x256`, `512x512` or `1024x1024`.
pub fn parse_image_size(s: &str) -> Option<ImageSize> {
    match s.trim() {
        "256x256" => Some(ImageSize::S256x256),
        "512x512" => Some(ImageSize::S512x512),
        "1024x1024" => Some(ImageSize::S1024x1024),
        _ => None,
    }
}

/// Decodes one `b64_json` payload into raw bytes.
pub fn decode_b64_image(payload: &str) -> Result<Vec<u8>> {
    let bytes = BASE64_STANDARD
        .decode(payload.trim())
        .context("invalid base64 image payload")?;
    if bytes.is_empty() {
        anyhow::bail!("empty image payload");
    }
    Ok(bytes)
}

/// OpenAI image generation client.
#[derive(Clone)]
pub struct ImageGenerationClient {
    client: Arc<Client<OpenAIConfig>>,
    http: reqwest::Client,
    size: ImageSize,
}

impl ImageGenerationClient {
    /// Creates a client for a compatible endpoint.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(base_url);
        Self::with_config(config)
    }

    fn with_config(config: OpenAIConfig) -> Self {
        Self {
            client: Arc::new(Client::with_config(config)),
            http: reqwest::Client::new(),
            size: ImageSize::S1024x1024,
        }
    }

    /// Sets the image size (default 1024x1024).
    pub fn with_size(mut self, size: ImageSize) -> Self {
        self.size = size;
        self
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .with_context(|| format!("failed to download image {}", url))?;
        if !response.status().is_success() {
            anyhow::bail!("image download failed ({}): {}", response.status(), url);
        }
        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            anyhow::bail!("empty image downloaded from {}", url);
        }
        Ok(bytes.to_vec())
    }

    async fn to_bytes(&self, image: &Image) -> Result<Vec<u8>> {
        match image {
            Image::B64Json { b64_json, .. } => decode_b64_image(b64_json.as_str()),
            Image::Url { url, .. } => self.download(url).await,
        }
    }
}

#[async_trait]
impl ImageGenerator for ImageGenerationClient {
    #[tracing::instrument(skip(self))]
    async fn generate_images(&self, description: &str, count: u8) -> Result<Vec<Vec<u8>>> {
        tracing::info!(
            size = ?self.size,
            count = count,
            prompt_preview = %description.chars().take(100).collect::<String>(),
            "OpenAI image generation request"
        );

        let request = CreateImageRequestArgs::default()
            .prompt(description)
            .n(count)
            .size(self.size)
            .response_format(ImageResponseFormat::B64Json)
            .build()?;

        let response = self
            .client
            .images()
            .create(request)
            .await
            .map_err(|e| anyhow::anyhow!("请求 GPT 出错了，gpt api err: {}", e))?;

        if response.data.is_empty() {
            anyhow::bail!("请求 GPT 出错了，gpt api err: no image in response");
        }

        let images = futures::future::try_join_all(
            response.data.iter().map(|image| self.to_bytes(image.as_ref())),
        )
        .await?;

        tracing::info!(
            images = images.len(),
            total_bytes = images.iter().map(Vec::len).sum::<usize>(),
            "OpenAI image generation completed"
        );
        Ok(images)
    }
}
