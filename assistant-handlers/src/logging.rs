//! Inbound message logging.

use async_trait::async_trait;
use gptbot_core::{Handler, HandlerResponse, Message, Result};
use tracing::{debug, info};

/// Logs sender and content of every message in before(), the outcome in after(); never stops.
pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    async fn before(&self, message: &Message) -> Result<bool> {
        if message.is_text() {
            info!(
                user_id = message.user.id,
                chat_id = message.chat.id,
                sender = %message.user.display_name(),
                content = %message.content,
                "Received text message"
            );
        } else {
            debug!(
                user_id = message.user.id,
                chat_id = message.chat.id,
                "Received non-text message"
            );
        }
        Ok(true)
    }

    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        debug!(message_id = %message.id, response = ?response, "Processed message");
        Ok(())
    }
}
