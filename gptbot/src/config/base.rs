//! Base config: Telegram Bot connection and logging. Loaded from env.

use anyhow::Result;
use std::env;

/// Log file used when LOG_FILE is unset.
pub const DEFAULT_LOG_FILE: &str = "logs/gptbot.log";

/// Base config: Telegram-related and logging only.
#[derive(Debug, Clone)]
pub struct BaseConfig {
    /// BOT_TOKEN
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// Log file path
    pub log_file: String,
}

impl BaseConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();

        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file: Self::log_file_from_env(),
        })
    }

    /// LOG_FILE or [`DEFAULT_LOG_FILE`]. Also used by the one-shot CLI commands.
    pub fn log_file_from_env() -> String {
        env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string())
    }

    /// Validate config (e.g. telegram_api_url must be valid URL if set).
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            anyhow::bail!("BOT_TOKEN is empty");
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }
}
