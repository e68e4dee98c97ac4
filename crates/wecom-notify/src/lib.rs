//! # WeCom notification client
//!
//! Sends plain-text alerts through a WeCom (企业微信) group-robot webhook. Used for liveness
//! alerts; callers log failures and never escalate them.
//!
//! ## Wire format
//!
//! `POST {endpoint}/cgi-bin/webhook/send?key=KEY` with
//! `{"msgtype": "text", "text": {"content": "..."}}`. The service answers
//! `{"errcode": 0, "errmsg": "ok"}` on success.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

/// Default WeCom API endpoint.
pub const WECOM_ENDPOINT: &str = "https://qyapi.weixin.qq.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors from the notification webhook.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("wecom-notify-err, transport: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("wecom-notify-err, statusCode: {status}, body: {body}")]
    Status { status: u16, body: String },

    #[error("wecom-notify-err, invalid response: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    #[error("wecom-notify-err, errcode: {errcode}, errmsg: {errmsg}")]
    Rejected { errcode: i64, errmsg: String },
}

/// Fire-and-forget alert channel.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends `message` as plain text.
    async fn send_plain_text(&self, message: &str) -> Result<(), NotifyError>;
}

#[derive(Debug, Serialize)]
struct TextMessage<'a> {
    msgtype: &'static str,
    text: TextContent<'a>,
}

#[derive(Debug, Serialize)]
struct TextContent<'a> {
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct WebhookResponse {
    #[serde(default)]
    errcode: i64,
    #[serde(default)]
    errmsg: String,
}

/// WeCom group-robot webhook client.
#[derive(Debug, Clone)]
pub struct WeComNotifyClient {
    client: Client,
    endpoint: String,
    send_key: String,
}

impl WeComNotifyClient {
    /// Creates a client for the public WeCom endpoint.
    pub fn new(send_key: String) -> Result<Self, NotifyError> {
        Self::with_endpoint(send_key, WECOM_ENDPOINT.to_string())
    }

    /// Creates a client for a custom endpoint (tests, proxies).
    pub fn with_endpoint(send_key: String, endpoint: String) -> Result<Self, NotifyError> {
        Self::with_timeout(send_key, endpoint, REQUEST_TIMEOUT)
    }

    fn with_timeout(
        send_key: String,
        endpoint: String,
        timeout: Duration,
    ) -> Result<Self, NotifyError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            send_key,
        })
    }
}

#[async_trait]
impl Notifier for WeComNotifyClient {
    async fn send_plain_text(&self, message: &str) -> Result<(), NotifyError> {
        let url = format!("{}/cgi-bin/webhook/send", self.endpoint);
        let body = TextMessage {
            msgtype: "text",
            text: TextContent { content: message },
        };

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.send_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        info!(
            status = status.as_u16(),
            request_content = %message,
            response_body = %text,
            "step: wecom notify webhook called"
        );

        if status.as_u16() != 200 {
            return Err(NotifyError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: WebhookResponse = serde_json::from_str(&text)?;
        if parsed.errmsg != "ok" {
            return Err(NotifyError::Rejected {
                errcode: parsed.errcode,
                errmsg: parsed.errmsg,
            });
        }
        Ok(())
    }
}
