//! Bot abstraction for delivering replies.
//!
//! [`Bot`] is transport-agnostic; the gptbot application implements it with teloxide, tests
//! substitute recording mocks.

use crate::error::Result;
use crate::types::{Chat, Message};
use async_trait::async_trait;

/// Abstraction for sending replies. Implementations map to a transport (e.g. Telegram).
///
/// Every method returns [`crate::BotError::Delivery`] when the transport rejects the send.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Sends a reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }

    /// Sends one image (raw encoded bytes, e.g. PNG) to the given chat.
    async fn send_image(&self, chat: &Chat, image: Vec<u8>) -> Result<()>;
}
