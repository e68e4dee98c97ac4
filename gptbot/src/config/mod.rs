//! Bot configuration: BaseConfig (Telegram + log) + AssistantConfig (OpenAI, replies) + WatchdogConfig (liveness alerts).

mod assistant;
mod base;
mod bot_config;
mod watchdog;

#[cfg(test)]
mod tests;

pub use assistant::AssistantConfig;
pub use base::{BaseConfig, DEFAULT_LOG_FILE};
pub use bot_config::BotConfig;
pub use watchdog::WatchdogConfig;
