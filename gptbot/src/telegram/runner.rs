//! REPL runner: converts teloxide messages to core::Message and dispatches them to HandlerChain.

use anyhow::Result;
use gptbot_core::ToCoreMessage;
use handler_chain::{ChainDispatcher, HandlerChain};
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{debug, error, info, instrument};

use super::adapters::TelegramMessageWrapper;

/// Starts the REPL. Each message is converted to core::Message and queued on its sender's
/// queue, so one user's messages are handled in arrival order.
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => info!(
            username = %me.user.username.as_deref().unwrap_or("unknown"),
            "Bot identity confirmed"
        ),
        Err(e) => error!(error = %e, "getMe failed before repl"),
    }

    let dispatcher = Arc::new(ChainDispatcher::new(handler_chain));

    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let dispatcher = dispatcher.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();
            debug!(
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                message_id = %core_msg.id,
                "step: message received from transport"
            );

            dispatcher.dispatch(core_msg);

            Ok(())
        }
    })
    .await;

    Ok(())
}
