//! Per-user message queues in front of a [`HandlerChain`].

use dashmap::DashMap;
use gptbot_core::Message;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::HandlerChain;

type QueueSender = mpsc::UnboundedSender<Message>;

/// Feeds messages into the chain through one FIFO queue per user.
///
/// [`dispatch`](Self::dispatch) enqueues synchronously, so a user's messages reach the chain
/// in the order they were dispatched and never overlap. Different users are handled
/// concurrently, each by its own worker task.
pub struct ChainDispatcher {
    chain: HandlerChain,
    queues: DashMap<i64, QueueSender>,
}

impl ChainDispatcher {
    pub fn new(chain: HandlerChain) -> Self {
        Self {
            chain,
            queues: DashMap::new(),
        }
    }

    /// Enqueues `message` on its sender's queue, starting the worker on first use.
    /// Must be called from within a Tokio runtime.
    pub fn dispatch(&self, message: Message) {
        let user_id = message.user.id;
        let tx = self
            .queues
            .entry(user_id)
            .or_insert_with(|| self.spawn_worker(user_id))
            .clone();

        if let Err(mpsc::error::SendError(message)) = tx.send(message) {
            error!(user_id, "Message queue receiver dropped, restarting worker");
            let tx = self.spawn_worker(user_id);
            self.queues.insert(user_id, tx.clone());
            if tx.send(message).is_err() {
                error!(user_id, "Failed to send message to restarted queue");
            }
        }
    }

    /// Number of users with a live queue.
    pub fn queue_count(&self) -> usize {
        self.queues.len()
    }

    fn spawn_worker(&self, user_id: i64) -> QueueSender {
        let (tx, rx) = mpsc::unbounded_channel::<Message>();
        tokio::spawn(Self::process_queue_loop(rx, self.chain.clone(), user_id));
        debug!(user_id, "step: message queue created");
        tx
    }

    async fn process_queue_loop(
        mut rx: mpsc::UnboundedReceiver<Message>,
        chain: HandlerChain,
        user_id: i64,
    ) {
        while let Some(message) = rx.recv().await {
            info!(user_id, message_id = %message.id, "Processing queued message");
            match chain.handle(&message).await {
                Ok(response) => debug!(
                    user_id,
                    response = ?response,
                    "step: queued message handled"
                ),
                Err(e) => error!(error = %e, user_id, "Failed to process queued message"),
            }
        }
    }
}
