//! Application entry points: the long-running bot and the one-shot adapter commands.

use anyhow::{Context, Result};
use gptbot_core::init_tracing;
use image_generation_client::ImageGenerator;
use llm_client::LlmClient;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::components::{build_bot_components, build_image_client, build_llm_client};
use crate::config::{AssistantConfig, BaseConfig, BotConfig};
use crate::telegram::run_repl;
use crate::watchdog::run_watchdog;

/// Main entry: validate config, init logging, build components, start the watchdog if
/// configured, then run the REPL until shutdown.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        model = %config.assistant().model,
        openai_base_url = %config.assistant().openai_base_url,
        "Initializing bot"
    );

    let components = build_bot_components(&config)?;

    match components.notifier.clone() {
        Some(notifier) => {
            let watchdog = config.watchdog();
            info!(interval_secs = watchdog.check_interval_secs, "Liveness watchdog enabled");
            tokio::spawn(run_watchdog(
                components.bot_adapter.clone(),
                notifier,
                watchdog.check_interval(),
                watchdog.alert_message.clone(),
            ));
        }
        None => info!("WECHAT_WORK_SEND_KEY not set, liveness watchdog disabled"),
    }

    info!("Bot started successfully");
    run_repl(components.teloxide_bot, components.handler_chain).await
}

/// Sends `prompt` to the completion endpoint as-is and returns the raw completion.
#[instrument(skip(prompt))]
pub async fn run_complete(prompt: &str) -> Result<String> {
    let config = load_assistant_config()?;
    let client = build_llm_client(&config);
    client
        .complete(prompt, config.max_tokens, config.temperature)
        .await
}

/// Generates `count` images and writes them to `out_dir` as `image-<i>.png`. Returns the paths.
#[instrument(skip(description))]
pub async fn run_image(description: &str, count: u8, out_dir: &Path) -> Result<Vec<PathBuf>> {
    let config = load_assistant_config()?;
    let client = build_image_client(&config)?;
    let images = client.generate_images(description, count).await?;
    write_images(&images, out_dir)
}

/// Writes each image to `out_dir/image-<i>.png`, creating the directory if needed.
pub fn write_images(images: &[Vec<u8>], out_dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;
    let mut paths = Vec::with_capacity(images.len());
    for (i, image) in images.iter().enumerate() {
        let path = out_dir.join(format!("image-{}.png", i + 1));
        std::fs::write(&path, image)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), bytes = image.len(), "Image written");
        paths.push(path);
    }
    Ok(paths)
}

fn load_assistant_config() -> Result<AssistantConfig> {
    let config = AssistantConfig::from_env()?;
    config.validate()?;
    init_tracing(&BaseConfig::log_file_from_env())?;
    Ok(config)
}
