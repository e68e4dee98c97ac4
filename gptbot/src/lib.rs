//! # gptbot
//!
//! Telegram personal assistant. Private chats go through the assistant handlers (OpenAI
//! completions and image generation with one-shot per-user memory); group chats are ignored.
//! An optional watchdog alerts a WeCom group robot when the bot stops responding.

pub mod cli;
pub mod components;
pub mod config;
pub mod runner;
pub mod telegram;
pub mod watchdog;

pub use cli::{load_config, Cli, Commands};
pub use components::{build_bot_components, build_handler_chain, BotComponents};
pub use config::{AssistantConfig, BaseConfig, BotConfig, WatchdogConfig};
pub use runner::{run_bot, run_complete, run_image};
pub use telegram::{run_repl, TelegramBotAdapter, TelegramMessageWrapper, TelegramUserWrapper};
pub use watchdog::{run_watchdog, LivenessProbe};
