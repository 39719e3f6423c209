//! Conversions from teloxide types to core types.

use crate::core::{Attachment, Chat, Message, ToCoreMessage, ToCoreUser, User};

/// Telegram user → core user.
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl ToCoreUser for TelegramUserWrapper<'_> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Telegram message → core message, including its attachment and the replied-to attachment.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl ToCoreMessage for TelegramMessageWrapper<'_> {
    fn to_core(&self) -> Message {
        let msg = self.0;
        let attachment = attachment_of(msg);
        Message {
            id: msg.id.0.to_string(),
            user: msg
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(User::unknown),
            chat: Chat {
                id: msg.chat.id.0,
                chat_type: chat_type(&msg.chat),
            },
            content: msg.text().or_else(|| msg.caption()).unwrap_or("").to_string(),
            message_type: attachment
                .as_ref()
                .map(Attachment::kind_label)
                .unwrap_or("text")
                .to_string(),
            created_at: msg.date,
            attachment,
            reply_to_message_id: msg.reply_to_message().map(|m| m.id.0.to_string()),
            reply_to_attachment: msg.reply_to_message().and_then(attachment_of),
            reply_to_date: msg.reply_to_message().map(|m| m.date),
        }
    }
}

/// Document, else the largest photo size, else video.
fn attachment_of(msg: &teloxide::types::Message) -> Option<Attachment> {
    if let Some(doc) = msg.document() {
        return Some(Attachment::Document {
            file_id: doc.file.id.to_string(),
            file_name: doc.file_name.clone(),
        });
    }
    if let Some(sizes) = msg.photo() {
        let largest = sizes
            .iter()
            .max_by_key(|p| u64::from(p.width) * u64::from(p.height))?;
        return Some(Attachment::Photo {
            file_id: largest.file.id.to_string(),
        });
    }
    msg.video().map(|video| Attachment::Video {
        file_id: video.file.id.to_string(),
    })
}

fn chat_type(chat: &teloxide::types::Chat) -> String {
    if chat.is_private() {
        "private"
    } else if chat.is_group() || chat.is_supergroup() {
        "group"
    } else {
        "channel"
    }
    .to_string()
}
