//! Recording mocks for the assistant handler tests: no Telegram, no OpenAI.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use gptbot_core::{Bot, BotError, Chat, Message, MessageKind, Result, User};
use image_generation_client::ImageGenerator;
use llm_client::LlmClient;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

/// One delivered item, in send order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Text { chat_id: i64, text: String },
    Image { chat_id: i64, bytes: Vec<u8> },
}

/// Bot that records every send. `fail_images` makes `send_image` fail; `fail_text` makes text
/// sends fail.
#[derive(Default)]
pub struct MockBot {
    pub sent: Mutex<Vec<Sent>>,
    pub fail_images: bool,
    pub fail_text: bool,
}

impl MockBot {
    pub fn failing_images() -> Self {
        Self {
            fail_images: true,
            ..Self::default()
        }
    }

    pub fn failing_text() -> Self {
        Self {
            fail_text: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter_map(|s| match s {
                Sent::Text { text, .. } => Some(text),
                Sent::Image { .. } => None,
            })
            .collect()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        if self.fail_text {
            return Err(BotError::Delivery("text rejected".to_string()));
        }
        self.sent.lock().unwrap().push(Sent::Text {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_image(&self, chat: &Chat, image: Vec<u8>) -> Result<()> {
        if self.fail_images {
            return Err(BotError::Delivery("photo rejected".to_string()));
        }
        self.sent.lock().unwrap().push(Sent::Image {
            chat_id: chat.id,
            bytes: image,
        });
        Ok(())
    }
}

/// Completion client returning queued results (last one repeats) and recording prompts.
pub struct MockLlm {
    replies: Mutex<VecDeque<std::result::Result<String, String>>>,
    pub prompts: Mutex<Vec<(String, u32, f32)>>,
    delay: Duration,
}

impl MockLlm {
    pub fn replying(reply: &str) -> Self {
        Self::with_results(vec![Ok(reply.to_string())])
    }

    pub fn failing(detail: &str) -> Self {
        Self::with_results(vec![Err(detail.to_string())])
    }

    pub fn with_results(results: Vec<std::result::Result<String, String>>) -> Self {
        Self {
            replies: Mutex::new(results.into()),
            prompts: Mutex::new(Vec::new()),
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .unwrap()
            .iter()
            .map(|(p, _, _)| p.clone())
            .collect()
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn complete(&self, prompt: &str, max_tokens: u32, temperature: f32) -> anyhow::Result<String> {
        self.prompts
            .lock()
            .unwrap()
            .push((prompt.to_string(), max_tokens, temperature));
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let next = {
            let mut replies = self.replies.lock().unwrap();
            if replies.len() > 1 {
                replies.pop_front()
            } else {
                replies.front().cloned()
            }
        };
        match next {
            Some(Ok(reply)) => Ok(reply),
            Some(Err(detail)) => Err(anyhow::anyhow!(detail)),
            None => Err(anyhow::anyhow!("no reply configured")),
        }
    }
}

/// Image generator returning `count` numbered one-byte images, or an error.
pub struct MockImages {
    pub error: Option<String>,
    pub calls: Mutex<Vec<(String, u8)>>,
    delay: Duration,
}

impl MockImages {
    pub fn ok() -> Self {
        Self {
            error: None,
            calls: Mutex::new(Vec::new()),
            delay: Duration::ZERO,
        }
    }

    pub fn failing(detail: &str) -> Self {
        Self {
            error: Some(detail.to_string()),
            calls: Mutex::new(Vec::new()),
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> Vec<(String, u8)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageGenerator for MockImages {
    async fn generate_images(&self, description: &str, count: u8) -> anyhow::Result<Vec<Vec<u8>>> {
        self.calls
            .lock()
            .unwrap()
            .push((description.to_string(), count));
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        match &self.error {
            Some(detail) => Err(anyhow::anyhow!(detail.clone())),
            None => Ok((0..count).map(|i| vec![i]).collect()),
        }
    }
}

pub fn text_message(user_id: i64, content: &str) -> Message {
    Message {
        id: format!("msg_{user_id}"),
        user: User {
            id: user_id,
            username: Some("alice".to_string()),
            first_name: Some("Alice".to_string()),
            last_name: None,
        },
        chat: Chat::private(user_id),
        content: content.to_string(),
        kind: MessageKind::Text,
        created_at: Utc::now(),
    }
}

/// Polls `done` every 5 ms for up to one second.
pub async fn wait_until(mut done: impl FnMut() -> bool) {
    for _ in 0..200 {
        if done() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("condition not reached within one second");
}
