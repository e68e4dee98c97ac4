//! Component factory: builds BotComponents from config. Isolates assembly logic from runner.

use anyhow::{Context, Result};
use assistant_handlers::{
    AssistantSettings, GroupChatHandler, InMemorySessionStore, LoggingHandler, MessageRouter,
    PrivateChatHandler, SessionStore,
};
use gptbot_core::Bot as CoreBot;
use handler_chain::HandlerChain;
use image_generation_client::{parse_image_size, ImageGenerationClient, ImageGenerator};
use llm_client::{LlmClient, OpenAILlmClient};
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{error, info, instrument};
use wecom_notify::{Notifier, WeComNotifyClient};

use crate::config::{AssistantConfig, BotConfig};
use crate::telegram::TelegramBotAdapter;

/// Everything run_bot needs: transport, adapter, chain and the optional alert channel.
#[derive(Clone)]
pub struct BotComponents {
    pub teloxide_bot: Bot,
    pub bot_adapter: Arc<TelegramBotAdapter>,
    pub handler_chain: HandlerChain,
    /// Present only when WECHAT_WORK_SEND_KEY is set.
    pub notifier: Option<Arc<dyn Notifier>>,
}

/// Builds the teloxide Bot, honouring TELEGRAM_API_URL when it parses.
pub fn build_teloxide_bot(config: &BotConfig) -> Bot {
    let bot = Bot::new(config.bot_token());
    match config.telegram_api_url() {
        Some(url_str) => match reqwest::Url::parse(url_str) {
            Ok(url) => bot.set_api_url(url),
            Err(e) => {
                error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                bot
            }
        },
        None => bot,
    }
}

/// Completion client for the configured endpoint and model.
pub fn build_llm_client(config: &AssistantConfig) -> Arc<dyn LlmClient> {
    Arc::new(
        OpenAILlmClient::with_base_url(
            config.openai_api_key.clone(),
            config.openai_base_url.clone(),
        )
        .with_model(config.model.clone()),
    )
}

/// Image client for the configured endpoint and size.
pub fn build_image_client(config: &AssistantConfig) -> Result<Arc<ImageGenerationClient>> {
    let size = parse_image_size(&config.image_size)
        .with_context(|| format!("unsupported IMAGE_SIZE: {}", config.image_size))?;
    Ok(Arc::new(
        ImageGenerationClient::with_base_url(
            config.openai_api_key.clone(),
            config.openai_base_url.clone(),
        )
        .with_size(size),
    ))
}

/// Chain: LoggingHandler, then MessageRouter (private assistant / group no-op).
pub fn build_handler_chain(
    bot: Arc<dyn CoreBot>,
    llm: Arc<dyn LlmClient>,
    images: Arc<dyn ImageGenerator>,
    sessions: Arc<dyn SessionStore>,
    settings: AssistantSettings,
) -> HandlerChain {
    let private = Arc::new(PrivateChatHandler::new(bot, llm, images, sessions, settings));
    let router = MessageRouter::new(private, Arc::new(GroupChatHandler));
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(router))
}

#[instrument(skip(config))]
pub fn build_bot_components(config: &BotConfig) -> Result<BotComponents> {
    let teloxide_bot = build_teloxide_bot(config);
    let bot_adapter = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));

    let assistant = config.assistant();
    let handler_chain = build_handler_chain(
        bot_adapter.clone(),
        build_llm_client(assistant),
        build_image_client(assistant)?,
        Arc::new(InMemorySessionStore::new()),
        assistant.settings(),
    );

    let notifier: Option<Arc<dyn Notifier>> = match config.watchdog().send_key.as_ref() {
        Some(key) => {
            let client =
                WeComNotifyClient::new(key.clone()).context("failed to build WeCom notify client")?;
            Some(Arc::new(client) as Arc<dyn Notifier>)
        }
        None => None,
    };

    info!(
        model = %assistant.model,
        image_size = %assistant.image_size,
        handlers = handler_chain.len(),
        watchdog = notifier.is_some(),
        "Bot components built"
    );

    Ok(BotComponents {
        teloxide_bot,
        bot_adapter,
        handler_chain,
        notifier,
    })
}
