//! Core types and traits: Handler, Bot (messaging gateway), Message, HandlerResponse, error, logger.
//! Transport-agnostic; the teloxide implementation lives in [`crate::telegram`].

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{parse_message_id, Bot, KeyboardLayout};
pub use error::{BotError, Result};
pub use logger::init_tracing;
pub use types::{
    Attachment, Chat, Handler, HandlerResponse, Message, ToCoreMessage,
    ToCoreUser, User,
};
