//! # Assistant handlers
//!
//! The private-chat assistant: per-user [`SessionStore`], image [`Intent`] classification,
//! request [`normalize`]-ation, [`build_reply`], and the [`PrivateChatHandler`] tying them to the
//! completion and image clients. [`MessageRouter`] selects the private or group handler by chat
//! kind; [`LoggingHandler`] logs every inbound message.

mod group_handler;
mod intent;
mod logging;
mod normalize;
mod private_handler;
mod reply;
mod router;
mod session;

pub use group_handler::GroupChatHandler;
pub use intent::{classify, ImageTrigger, Intent, TriggerKind, IMAGE_TRIGGERS};
pub use logging::LoggingHandler;
pub use normalize::{normalize, MAX_REQUEST_CHARS, SENTENCE_TERMINATORS};
pub use private_handler::{
    AssistantSettings, DropReason, MessageOutcome, OutgoingReply, PrivateChatHandler,
    ADAPTER_ERROR_PREFIX, IMAGE_DELIVERY_ERROR_PREFIX,
};
pub use reply::{build_reply, FALLBACK_REPLY};
pub use router::MessageRouter;
pub use session::{InMemorySessionStore, SessionStore, UserLocks, UserSession};
