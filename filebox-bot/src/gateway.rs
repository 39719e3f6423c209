//! Outbound sends with uniform logging.
//!
//! Every call is attempted once. Success is logged at info with the given description, failure
//! at error; neither is propagated. The returned bool lets handlers branch on the outcome.

use std::sync::Arc;

use file_registry::MediaKind;
use tracing::{error, info};

use crate::core::{Bot, Chat, KeyboardLayout, Result};

/// Logging wrapper around the messaging gateway.
#[derive(Clone)]
pub struct Gateway {
    bot: Arc<dyn Bot>,
}

impl Gateway {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }

    pub async fn send_text(&self, chat: &Chat, text: &str, success_log: &str) -> bool {
        let result = self.bot.send_message(chat, text).await;
        Self::log_outcome(result, chat, "message", success_log)
    }

    pub async fn send_markdown(&self, chat: &Chat, text: &str, success_log: &str) -> bool {
        let result = self.bot.send_markdown(chat, text).await;
        Self::log_outcome(result, chat, "markdown message", success_log)
    }

    pub async fn send_menu(
        &self,
        chat: &Chat,
        text: &str,
        keyboard: &KeyboardLayout,
        success_log: &str,
    ) -> bool {
        let result = self.bot.send_menu(chat, text, keyboard).await;
        Self::log_outcome(result, chat, "menu", success_log)
    }

    /// Sends a stored file back with the send method matching its kind.
    pub async fn send_file(
        &self,
        kind: MediaKind,
        chat: &Chat,
        file_id: &str,
        caption: &str,
        success_log: &str,
    ) -> bool {
        let (result, what) = match kind {
            MediaKind::Photo => (self.bot.send_photo(chat, file_id, caption).await, "photo"),
            MediaKind::Video => (self.bot.send_video(chat, file_id, caption).await, "video"),
            MediaKind::Document => (
                self.bot.send_document(chat, file_id, caption).await,
                "document",
            ),
        };
        Self::log_outcome(result, chat, what, success_log)
    }

    pub async fn forward(
        &self,
        to_chat_id: i64,
        from: &Chat,
        message_id: &str,
        success_log: &str,
    ) -> bool {
        let result = self.bot.forward_message(to_chat_id, from, message_id).await;
        Self::log_outcome(result, from, "forward", success_log)
    }

    fn log_outcome(result: Result<()>, chat: &Chat, what: &str, success_log: &str) -> bool {
        match result {
            Ok(()) => {
                info!(chat_id = chat.id, "{}", success_log);
                true
            }
            Err(e) => {
                error!(error = %e, chat_id = chat.id, kind = what, "Failed to send {}", what);
                false
            }
        }
    }
}
