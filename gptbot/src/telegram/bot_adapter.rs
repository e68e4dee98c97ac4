//! Wraps teloxide::Bot and implements [`gptbot_core::Bot`] and the watchdog's [`LivenessProbe`].

use async_trait::async_trait;
use gptbot_core::{Bot as CoreBot, BotError, Chat, Result};
use teloxide::{
    prelude::*,
    types::{ChatId, InputFile},
};
use tracing::{debug, warn};

use crate::watchdog::LivenessProbe;

/// File name attached to generated images.
const IMAGE_FILE_NAME: &str = "image.png";

/// Thin wrapper around teloxide::Bot.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| BotError::Delivery(e.to_string()))?;
        Ok(())
    }

    async fn send_image(&self, chat: &Chat, image: Vec<u8>) -> Result<()> {
        let bytes = image.len();
        self.bot
            .send_photo(
                ChatId(chat.id),
                InputFile::memory(image).file_name(IMAGE_FILE_NAME),
            )
            .await
            .map_err(|e| BotError::Delivery(e.to_string()))?;
        debug!(chat_id = chat.id, bytes, "Photo sent");
        Ok(())
    }
}

#[async_trait]
impl LivenessProbe for TelegramBotAdapter {
    /// The bot is alive while `getMe` succeeds.
    async fn is_alive(&self) -> bool {
        match self.bot.get_me().await {
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, "getMe failed");
                false
            }
        }
    }
}
