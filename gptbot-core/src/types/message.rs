//! Message type for the core model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{chat::Chat, user::User};

/// What the transport delivered. Only text messages are processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    Text,
    /// Stickers, photos, voice, service messages, ...
    Other,
}

/// An inbound message: sender, chat, content. Read-only for handlers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    /// Text content; empty for non-text messages.
    pub content: String,
    pub kind: MessageKind,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn is_text(&self) -> bool {
        self.kind == MessageKind::Text
    }
}
