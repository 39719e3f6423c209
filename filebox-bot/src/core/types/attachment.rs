//! Uploaded content carried by a message.

use serde::{Deserialize, Serialize};

/// File attached to a message. `file_id` is Telegram's opaque reference, reusable for re-sending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Attachment {
    Document {
        file_id: String,
        file_name: Option<String>,
    },
    /// Highest-resolution variant of the photo.
    Photo { file_id: String },
    Video { file_id: String },
}

impl Attachment {
    pub fn file_id(&self) -> &str {
        match self {
            Attachment::Document { file_id, .. }
            | Attachment::Photo { file_id }
            | Attachment::Video { file_id } => file_id,
        }
    }

    /// `message_type` label for logs and the core message.
    pub fn kind_label(&self) -> &'static str {
        match self {
            Attachment::Document { .. } => "document",
            Attachment::Photo { .. } => "photo",
            Attachment::Video { .. } => "video",
        }
    }
}
