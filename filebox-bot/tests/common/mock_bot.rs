//! Mock implementation of [`filebox_bot::Bot`] for integration tests.
//!
//! Records every outbound call in order so tests can assert on exactly what the user (and the
//! archive chat) would have received, without hitting Telegram.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use filebox_bot::{Attachment, Bot, BotError, Chat, KeyboardLayout, Message, Result, User};
use std::sync::{Arc, Mutex};

/// One recorded outbound call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(dead_code)] // not every test file matches every variant
pub enum Sent {
    Text { chat_id: i64, text: String },
    Markdown { chat_id: i64, text: String },
    Menu { chat_id: i64, text: String, keyboard: KeyboardLayout },
    Document { chat_id: i64, file_id: String, caption: String },
    Photo { chat_id: i64, file_id: String, caption: String },
    Video { chat_id: i64, file_id: String, caption: String },
    Forward { to_chat_id: i64, from_chat_id: i64, message_id: String },
}

/// Mock Bot that records calls. Forwards fail when `fail_forwards` is set.
#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<Sent>>,
    fail_forwards: bool,
}

#[allow(dead_code)]
impl MockBot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// A MockBot whose `forward_message` always returns a gateway error.
    pub fn failing_forwards() -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            fail_forwards: true,
        })
    }

    /// All recorded calls, oldest first.
    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    /// Texts of plain-text replies, oldest first.
    pub fn texts(&self) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter_map(|s| match s {
                Sent::Text { text, .. } => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.sent.lock().unwrap().clear();
    }

    fn record(&self, sent: Sent) {
        self.sent.lock().unwrap().push(sent);
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.record(Sent::Text {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_markdown(&self, chat: &Chat, text: &str) -> Result<()> {
        self.record(Sent::Markdown {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_menu(&self, chat: &Chat, text: &str, keyboard: &KeyboardLayout) -> Result<()> {
        self.record(Sent::Menu {
            chat_id: chat.id,
            text: text.to_string(),
            keyboard: keyboard.clone(),
        });
        Ok(())
    }

    async fn send_document(&self, chat: &Chat, file_id: &str, caption: &str) -> Result<()> {
        self.record(Sent::Document {
            chat_id: chat.id,
            file_id: file_id.to_string(),
            caption: caption.to_string(),
        });
        Ok(())
    }

    async fn send_photo(&self, chat: &Chat, file_id: &str, caption: &str) -> Result<()> {
        self.record(Sent::Photo {
            chat_id: chat.id,
            file_id: file_id.to_string(),
            caption: caption.to_string(),
        });
        Ok(())
    }

    async fn send_video(&self, chat: &Chat, file_id: &str, caption: &str) -> Result<()> {
        self.record(Sent::Video {
            chat_id: chat.id,
            file_id: file_id.to_string(),
            caption: caption.to_string(),
        });
        Ok(())
    }

    async fn forward_message(
        &self,
        to_chat_id: i64,
        from: &Chat,
        message_id: &str,
    ) -> Result<()> {
        if self.fail_forwards {
            return Err(BotError::Gateway("Forbidden: bot is not a member".to_string()));
        }
        self.record(Sent::Forward {
            to_chat_id,
            from_chat_id: from.id,
            message_id: message_id.to_string(),
        });
        Ok(())
    }
}

/// Unix timestamp used as the date of every test message.
#[allow(dead_code)]
pub const MESSAGE_TS: i64 = 1_700_000_000;

/// Core message in private chat `chat_id`; `content` is the text (or caption).
#[allow(dead_code)]
pub fn message(chat_id: i64, id: &str, content: &str, attachment: Option<Attachment>) -> Message {
    let message_type = attachment
        .as_ref()
        .map(Attachment::kind_label)
        .unwrap_or("text")
        .to_string();
    Message {
        id: id.to_string(),
        user: User {
            id: chat_id,
            username: Some("alice".to_string()),
            first_name: Some("Alice".to_string()),
            last_name: None,
        },
        chat: Chat::private(chat_id),
        content: content.to_string(),
        message_type,
        created_at: Utc.timestamp_opt(MESSAGE_TS, 0).unwrap(),
        attachment,
        reply_to_message_id: None,
        reply_to_attachment: None,
        reply_to_date: None,
    }
}

#[allow(dead_code)]
pub fn text(chat_id: i64, content: &str) -> Message {
    message(chat_id, "1", content, None)
}
