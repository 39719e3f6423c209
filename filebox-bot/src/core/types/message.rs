//! Inbound message type for the core model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{attachment::Attachment, chat::Chat, user::User};

/// A single inbound message: text (or caption), optional attachment and reply context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    /// Text of the message, or its caption for media; empty when neither is present.
    pub content: String,
    /// `text`, `document`, `photo` or `video`.
    pub message_type: String,
    /// Telegram message date; generated media names use its Unix timestamp.
    pub created_at: DateTime<Utc>,
    pub attachment: Option<Attachment>,
    pub reply_to_message_id: Option<String>,
    /// Attachment of the replied-to message; `/delete` as a reply to a document uses its file name.
    pub reply_to_attachment: Option<Attachment>,
    /// Date of the replied-to message; names a replied document that was stored without one.
    pub reply_to_date: Option<DateTime<Utc>>,
}
