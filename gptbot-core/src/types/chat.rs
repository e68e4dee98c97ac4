//! Chat identity type for core messages.

use serde::{Deserialize, Serialize};

/// Kind of conversation a message arrived in. Selects the private or group handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatKind {
    /// One-to-one conversation with the bot.
    Private,
    /// Group, supergroup or channel.
    Group,
}

/// Chat identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub kind: ChatKind,
}

impl Chat {
    pub fn private(id: i64) -> Self {
        Self {
            id,
            kind: ChatKind::Private,
        }
    }

    pub fn group(id: i64) -> Self {
        Self {
            id,
            kind: ChatKind::Group,
        }
    }

    pub fn is_private(&self) -> bool {
        self.kind == ChatKind::Private
    }
}
