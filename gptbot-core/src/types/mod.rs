//! Core types: user, chat, message, handler response, and Handler trait.
//!
//! One file per main type.

mod chat;
mod handler;
mod message;
mod response;
mod user;

pub use chat::{Chat, ChatKind};
pub use handler::{Handler, ToCoreMessage, ToCoreUser};
pub use message::{Message, MessageKind};
pub use response::HandlerResponse;
pub use user::User;
