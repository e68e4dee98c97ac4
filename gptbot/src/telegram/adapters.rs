//! Adapters from Telegram (teloxide) types to gptbot_core types.

use gptbot_core::{Chat, Message, MessageKind, ToCoreMessage, ToCoreUser, User};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`].
///
/// Private chats map to [`Chat::private`]; groups, supergroups and channels to [`Chat::group`].
/// Anything without text becomes [`MessageKind::Other`] with empty content.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        let chat_id = self.0.chat.id.0;
        let chat = if self.0.chat.is_private() {
            Chat::private(chat_id)
        } else {
            Chat::group(chat_id)
        };
        let (content, kind) = match self.0.text() {
            Some(text) => (text.to_string(), MessageKind::Text),
            None => (String::new(), MessageKind::Other),
        };

        Message {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(|| User {
                    id: chat_id,
                    username: None,
                    first_name: None,
                    last_name: None,
                }),
            chat,
            content,
            kind,
            created_at: self.0.date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gptbot_core::ChatKind;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> teloxide::types::Message {
        serde_json::from_value(value).unwrap()
    }

    /// **Test: TelegramUserWrapper converts teloxide User to core User with correct id, username, first_name, last_name.**
    #[test]
    fn test_telegram_user_wrapper_to_core() {
        let user = teloxide::types::User {
            id: teloxide::types::UserId(123),
            is_bot: false,
            first_name: "Test".to_string(),
            last_name: Some("User".to_string()),
            username: Some("testuser".to_string()),
            language_code: Some("zh".to_string()),
            is_premium: false,
            added_to_attachment_menu: false,
        };

        let core_user = TelegramUserWrapper(&user).to_core();

        assert_eq!(core_user.id, 123);
        assert_eq!(core_user.username, Some("testuser".to_string()));
        assert_eq!(core_user.display_name(), "Test User");
    }

    /// **Test: private text message maps to a private chat, text kind and sender id.**
    #[test]
    fn test_private_text_message() {
        let msg = parse(json!({
            "message_id": 7,
            "date": 1706529600,
            "chat": {"id": 42, "type": "private", "first_name": "Alice"},
            "from": {"id": 42, "is_bot": false, "first_name": "Alice", "username": "alice"},
            "text": "今天天气怎么样"
        }));

        let core = TelegramMessageWrapper(&msg).to_core();

        assert_eq!(core.id, "7");
        assert_eq!(core.user.id, 42);
        assert_eq!(core.chat.id, 42);
        assert_eq!(core.chat.kind, ChatKind::Private);
        assert_eq!(core.kind, MessageKind::Text);
        assert_eq!(core.content, "今天天气怎么样");
    }

    /// **Test: supergroup message maps to a group chat.**
    #[test]
    fn test_supergroup_message() {
        let msg = parse(json!({
            "message_id": 8,
            "date": 1706529600,
            "chat": {"id": -1001234, "type": "supergroup", "title": "Friends"},
            "from": {"id": 42, "is_bot": false, "first_name": "Alice"},
            "text": "hello"
        }));

        let core = TelegramMessageWrapper(&msg).to_core();

        assert_eq!(core.chat.kind, ChatKind::Group);
        assert_eq!(core.chat.id, -1001234);
    }

    /// **Test: photo message without caption text is Other with empty content.**
    #[test]
    fn test_photo_message_is_other() {
        let msg = parse(json!({
            "message_id": 9,
            "date": 1706529600,
            "chat": {"id": 42, "type": "private", "first_name": "Alice"},
            "from": {"id": 42, "is_bot": false, "first_name": "Alice"},
            "photo": [{"file_id": "f", "file_unique_id": "u", "width": 1, "height": 1, "file_size": 3}]
        }));

        let core = TelegramMessageWrapper(&msg).to_core();

        assert_eq!(core.kind, MessageKind::Other);
        assert!(core.content.is_empty());
    }
}
