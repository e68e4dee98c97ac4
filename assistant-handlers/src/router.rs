//! Chat-kind dispatch.

use async_trait::async_trait;
use gptbot_core::{ChatKind, Handler, HandlerResponse, Message, Result};
use std::sync::Arc;

/// Sends private messages to one handler and group messages to another.
pub struct MessageRouter {
    private: Arc<dyn Handler>,
    group: Arc<dyn Handler>,
}

impl MessageRouter {
    pub fn new(private: Arc<dyn Handler>, group: Arc<dyn Handler>) -> Self {
        Self { private, group }
    }

    fn select(&self, message: &Message) -> &Arc<dyn Handler> {
        match message.chat.kind {
            ChatKind::Private => &self.private,
            ChatKind::Group => &self.group,
        }
    }
}

#[async_trait]
impl Handler for MessageRouter {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        self.select(message).handle(message).await
    }
}
