//! Messaging gateway abstraction.
//!
//! [`Bot`] is transport-agnostic: handlers send text, Markdown, keyboards and stored files through
//! it. [`crate::telegram::TelegramBotAdapter`] implements it with teloxide; tests use a recording mock.

use async_trait::async_trait;

use super::error::{BotError, Result};
use super::types::Chat;

/// Rows of reply-keyboard button labels.
pub type KeyboardLayout = Vec<Vec<String>>;

/// Outbound operations of the messaging gateway. `file_id` is an opaque reference previously
/// received from the transport; nothing is uploaded.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends plain text.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends text that is already MarkdownV2-escaped. Link previews are disabled.
    async fn send_markdown(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends text together with a persistent reply keyboard.
    async fn send_menu(&self, chat: &Chat, text: &str, keyboard: &KeyboardLayout) -> Result<()>;
    async fn send_document(&self, chat: &Chat, file_id: &str, caption: &str) -> Result<()>;
    async fn send_photo(&self, chat: &Chat, file_id: &str, caption: &str) -> Result<()>;
    async fn send_video(&self, chat: &Chat, file_id: &str, caption: &str) -> Result<()>;
    /// Forwards message `message_id` of `from` to chat `to_chat_id`.
    async fn forward_message(&self, to_chat_id: i64, from: &Chat, message_id: &str)
        -> Result<()>;
}

/// Parses a core message id (transport numeric string) into an i32.
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| BotError::Gateway(format!("Invalid message_id: {}", s)))
}
