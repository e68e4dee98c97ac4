//! Error types for the bot core.
//!
//! [`BotError`] is the top-level error. Empty input is deliberately absent: dropping a message
//! is an outcome, not a failure.

use thiserror::Error;

/// Top-level error for gptbot (upstream adapter, reply delivery, config, IO).
#[derive(Error, Debug)]
pub enum BotError {
    /// Completion or image API failed; the detail is shown to the user as-is.
    #[error("Adapter error: {0}")]
    Adapter(String),

    /// Sending a reply back through the transport failed.
    #[error("Delivery error: {0}")]
    Delivery(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for core operations; uses [`BotError`].
pub type Result<T> = std::result::Result<T, BotError>;
