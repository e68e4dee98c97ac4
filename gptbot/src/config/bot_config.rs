//! BotConfig: BaseConfig + AssistantConfig + WatchdogConfig. Use load() for env-based loading.

use anyhow::Result;

use super::{AssistantConfig, BaseConfig, WatchdogConfig};

/// Full application config. Use BotConfig::load() for env-based loading.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub base: BaseConfig,
    pub assistant: AssistantConfig,
    pub watchdog: WatchdogConfig,
}

impl BotConfig {
    /// Load full config from environment variables. If `token` is provided it overrides BOT_TOKEN.
    /// Call validate() after load to check config before init.
    pub fn load(token: Option<String>) -> Result<Self> {
        Ok(Self {
            base: BaseConfig::load(token)?,
            assistant: AssistantConfig::from_env()?,
            watchdog: WatchdogConfig::from_env(),
        })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        self.assistant.validate()?;
        if self.watchdog.enabled() && self.watchdog.check_interval_secs == 0 {
            anyhow::bail!("LIVENESS_CHECK_INTERVAL_SECS must be greater than 0");
        }
        Ok(())
    }

    pub fn bot_token(&self) -> &str {
        &self.base.bot_token
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.base.telegram_api_url.as_deref()
    }
    pub fn assistant(&self) -> &AssistantConfig {
        &self.assistant
    }
    pub fn watchdog(&self) -> &WatchdogConfig {
        &self.watchdog
    }
}
