//! # gptbot-core
//!
//! Core types and traits for the assistant bot: [`Bot`], [`Handler`], message, chat and user types,
//! the [`BotError`] taxonomy, and tracing initialization. Transport-agnostic; used by
//! handler-chain, assistant-handlers and the gptbot application.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{BotError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, ChatKind, Handler, HandlerResponse, Message, MessageKind, ToCoreMessage, ToCoreUser,
    User,
};
