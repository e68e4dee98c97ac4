//! 私聊处理：one request/response cycle per inbound private text message.

use async_trait::async_trait;
use gptbot_core::{Bot, BotError, Handler, HandlerResponse, Message, Result};
use image_generation_client::ImageGenerator;
use llm_client::LlmClient;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::intent::{classify, Intent};
use crate::normalize::normalize;
use crate::reply::build_reply;
use crate::session::{SessionStore, UserLocks};

/// Prefix of the text sent to the user when the completion or image API fails.
pub const ADAPTER_ERROR_PREFIX: &str = "gpt request error: ";
/// Prefix of the text sent when delivering a generated image fails.
pub const IMAGE_DELIVERY_ERROR_PREFIX: &str = "[reply image error]: ";

/// Completion parameters and reply decoration.
#[derive(Debug, Clone, PartialEq)]
pub struct AssistantSettings {
    pub max_tokens: u32,
    pub temperature: f32,
    pub reply_prefix: String,
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            max_tokens: 512,
            temperature: 0.7,
            reply_prefix: String::new(),
        }
    }
}

/// Why a message produced no reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    EmptyInput,
    ImageSkip,
    EmptyImageDescription,
}

/// What was delivered to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutgoingReply {
    Text(String),
    Images(Vec<Vec<u8>>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageOutcome {
    Dropped(DropReason),
    Replied(OutgoingReply),
}

/// Routes private text to the completion path or the image path and keeps the user's session.
pub struct PrivateChatHandler {
    bot: Arc<dyn Bot>,
    llm: Arc<dyn LlmClient>,
    images: Arc<dyn ImageGenerator>,
    sessions: Arc<dyn SessionStore>,
    locks: UserLocks,
    settings: AssistantSettings,
}

impl PrivateChatHandler {
    pub fn new(
        bot: Arc<dyn Bot>,
        llm: Arc<dyn LlmClient>,
        images: Arc<dyn ImageGenerator>,
        sessions: Arc<dyn SessionStore>,
        settings: AssistantSettings,
    ) -> Self {
        Self {
            bot,
            llm,
            images,
            sessions,
            locks: UserLocks::new(),
            settings,
        }
    }

    pub fn settings(&self) -> &AssistantSettings {
        &self.settings
    }

    /// Handles one text message end to end. Messages from the same user are processed one at a
    /// time so each sees the session written by the previous one.
    ///
    /// Upstream failures are reported to the user as text and returned as [`BotError::Adapter`];
    /// transport failures are returned as-is.
    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    pub async fn process_message(&self, message: &Message) -> Result<MessageOutcome> {
        let user_id = message.user.id;
        let _guard = self.locks.lock(user_id).await;
        let session = self.sessions.get(user_id).await;

        match classify(&message.content, &session.last_prompt) {
            Intent::PlainText => self.text_flow(message, &session.last_prompt).await,
            Intent::ImageNew { description, count } => {
                if description.is_empty() {
                    info!(user_id, "step: image request without description, dropped");
                    return Ok(MessageOutcome::Dropped(DropReason::EmptyImageDescription));
                }
                self.sessions.set(user_id, &description, "").await;
                self.image_flow(message, &description, count).await
            }
            Intent::ImageContinue { description, count } => {
                self.image_flow(message, &description, count).await
            }
            Intent::ImageSkip => {
                info!(user_id, "step: no previous image description, dropped");
                Ok(MessageOutcome::Dropped(DropReason::ImageSkip))
            }
        }
    }

    async fn text_flow(&self, message: &Message, prior_prompt: &str) -> Result<MessageOutcome> {
        let user_id = message.user.id;
        let request = normalize(&message.content, prior_prompt);
        if request.is_empty() {
            info!(user_id, "step: user message is empty, dropped");
            return Ok(MessageOutcome::Dropped(DropReason::EmptyInput));
        }

        info!(
            user_id,
            request_len = request.chars().count(),
            has_context = !prior_prompt.is_empty(),
            "step: requesting completion"
        );
        let raw = match self
            .llm
            .complete(&request, self.settings.max_tokens, self.settings.temperature)
            .await
        {
            Ok(raw) => raw,
            Err(e) => return Err(self.report_adapter_error(message, &e).await),
        };

        self.sessions
            .set(user_id, &normalize(&message.content, ""), &raw)
            .await;

        let reply = build_reply(&raw, &self.settings.reply_prefix);
        self.bot.reply_to(message, &reply).await?;
        info!(user_id, reply_len = reply.chars().count(), "step: text reply sent");
        Ok(MessageOutcome::Replied(OutgoingReply::Text(reply)))
    }

    async fn image_flow(
        &self,
        message: &Message,
        description: &str,
        count: u8,
    ) -> Result<MessageOutcome> {
        let user_id = message.user.id;
        info!(
            user_id,
            count,
            description_preview = %description.chars().take(50).collect::<String>(),
            "step: requesting images"
        );
        let images = match self.images.generate_images(description, count).await {
            Ok(images) => images,
            Err(e) => return Err(self.report_adapter_error(message, &e).await),
        };

        for (index, image) in images.iter().enumerate() {
            if let Err(e) = self.bot.send_image(&message.chat, image.clone()).await {
                error!(user_id, index, error = %e, "Failed to send image");
                let text = format!("{IMAGE_DELIVERY_ERROR_PREFIX}{e}");
                if let Err(notify_err) = self.bot.send_message(&message.chat, &text).await {
                    warn!(user_id, error = %notify_err, "Failed to report image delivery error");
                }
                return Err(e);
            }
        }

        info!(user_id, sent = images.len(), "step: images sent");
        Ok(MessageOutcome::Replied(OutgoingReply::Images(images)))
    }

    /// Shows the upstream error to the user and converts it for the caller. A failed send wins
    /// over the adapter error.
    async fn report_adapter_error(&self, message: &Message, err: &anyhow::Error) -> BotError {
        let detail = err.to_string();
        error!(user_id = message.user.id, error = %detail, "Upstream API request failed");
        let text = format!("{ADAPTER_ERROR_PREFIX}{detail}");
        match self.bot.reply_to(message, &text).await {
            Ok(()) => BotError::Adapter(detail),
            Err(send_err) => send_err,
        }
    }
}

#[async_trait]
impl Handler for PrivateChatHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !message.is_text() {
            return Ok(HandlerResponse::Ignore);
        }
        match self.process_message(message).await? {
            MessageOutcome::Dropped(reason) => {
                info!(user_id = message.user.id, reason = ?reason, "step: message dropped");
                Ok(HandlerResponse::Stop)
            }
            MessageOutcome::Replied(OutgoingReply::Text(text)) => Ok(HandlerResponse::Reply(text)),
            MessageOutcome::Replied(OutgoingReply::Images(_)) => Ok(HandlerResponse::Stop),
        }
    }
}
