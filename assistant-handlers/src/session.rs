//! Per-user one-shot conversational memory and per-user serialization.

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Last exchanged pair for one user. The prompt slot doubles as the image description
/// remembered for "再来一张"-style follow-ups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSession {
    pub last_prompt: String,
    pub last_reply: String,
}

/// Keyed session storage. Operations cannot fail; an unseen user yields the empty session.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, user_id: i64) -> UserSession;

    /// Overwrites the user's session (no merge).
    async fn set(&self, user_id: i64, prompt: &str, reply: &str);
}

/// Process-lifetime session store.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: DashMap<i64, UserSession>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, user_id: i64) -> UserSession {
        self.sessions
            .get(&user_id)
            .map(|s| s.value().clone())
            .unwrap_or_default()
    }

    async fn set(&self, user_id: i64, prompt: &str, reply: &str) {
        self.sessions.insert(
            user_id,
            UserSession {
                last_prompt: prompt.to_string(),
                last_reply: reply.to_string(),
            },
        );
    }
}

/// One async mutex per user id. Holding the guard for a whole message makes the session
/// read-modify-write sequential per user while different users proceed in parallel.
#[derive(Debug, Default, Clone)]
pub struct UserLocks {
    locks: Arc<DashMap<i64, Arc<Mutex<()>>>>,
}

impl UserLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for the user's lock. Waiters are served in arrival order.
    pub async fn lock(&self, user_id: i64) -> OwnedMutexGuard<()> {
        let mutex = self.locks.entry(user_id).or_default().clone();
        mutex.lock_owned().await
    }
}
