//! 群聊处理：group messages are observed but not answered.

use async_trait::async_trait;
use gptbot_core::{Handler, HandlerResponse, Message, Result};
use tracing::debug;

pub struct GroupChatHandler;

#[async_trait]
impl Handler for GroupChatHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        debug!(
            chat_id = message.chat.id,
            user_id = message.user.id,
            "Group message ignored"
        );
        Ok(HandlerResponse::Ignore)
    }
}
