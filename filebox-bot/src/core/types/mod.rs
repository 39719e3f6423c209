//! Core types: user, chat, message, attachment, handler response, and Handler trait.
//!
//! One file per main type, as in the rest of the crate.

mod attachment;
mod chat;
mod handler;
mod message;
mod response;
mod user;

pub use attachment::Attachment;
pub use chat::Chat;
pub use handler::{Handler, ToCoreMessage, ToCoreUser};
pub use message::Message;
pub use response::HandlerResponse;
pub use user::User;
