//! Wraps teloxide::Bot and implements [`crate::core::Bot`]. Stored files are re-sent by file id.

use crate::core::{parse_message_id, Bot as CoreBot, BotError, Chat, KeyboardLayout, Result};
use async_trait::async_trait;
use teloxide::{
    prelude::*,
    types::{
        ChatId, FileId, InputFile, KeyboardButton, KeyboardMarkup, LinkPreviewOptions, MessageId,
        ParseMode,
    },
};

/// Thin wrapper around teloxide::Bot that implements core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

fn gateway_error(e: teloxide::RequestError) -> BotError {
    BotError::Gateway(e.to_string())
}

fn no_link_preview() -> LinkPreviewOptions {
    LinkPreviewOptions {
        is_disabled: true,
        url: None,
        prefer_small_media: false,
        prefer_large_media: false,
        show_above_text: false,
    }
}

fn reply_keyboard(layout: &KeyboardLayout) -> KeyboardMarkup {
    let rows: Vec<Vec<KeyboardButton>> = layout
        .iter()
        .map(|row| row.iter().map(KeyboardButton::new).collect())
        .collect();
    KeyboardMarkup::new(rows).resize_keyboard().persistent()
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text)
            .await
            .map_err(gateway_error)?;
        Ok(())
    }

    async fn send_markdown(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text)
            .parse_mode(ParseMode::MarkdownV2)
            .link_preview_options(no_link_preview())
            .await
            .map_err(gateway_error)?;
        Ok(())
    }

    async fn send_menu(&self, chat: &Chat, text: &str, keyboard: &KeyboardLayout) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text)
            .reply_markup(reply_keyboard(keyboard))
            .await
            .map_err(gateway_error)?;
        Ok(())
    }

    async fn send_document(&self, chat: &Chat, file_id: &str, caption: &str) -> Result<()> {
        self.bot
            .send_document(ChatId(chat.id), InputFile::file_id(FileId(file_id.to_string())))
            .caption(caption)
            .await
            .map_err(gateway_error)?;
        Ok(())
    }

    async fn send_photo(&self, chat: &Chat, file_id: &str, caption: &str) -> Result<()> {
        self.bot
            .send_photo(ChatId(chat.id), InputFile::file_id(FileId(file_id.to_string())))
            .caption(caption)
            .await
            .map_err(gateway_error)?;
        Ok(())
    }

    async fn send_video(&self, chat: &Chat, file_id: &str, caption: &str) -> Result<()> {
        self.bot
            .send_video(ChatId(chat.id), InputFile::file_id(FileId(file_id.to_string())))
            .caption(caption)
            .await
            .map_err(gateway_error)?;
        Ok(())
    }

    async fn forward_message(
        &self,
        to_chat_id: i64,
        from: &Chat,
        message_id: &str,
    ) -> Result<()> {
        let id = parse_message_id(message_id)?;
        self.bot
            .forward_message(ChatId(to_chat_id), ChatId(from.id), MessageId(id))
            .await
            .map_err(gateway_error)?;
        Ok(())
    }
}
