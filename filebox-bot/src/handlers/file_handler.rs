//! The command dispatcher: classifies each message and answers it.
//!
//! Order: attachment (upload, caption ignored), then command (including `/start download_*`
//! deep links), else "invalid command". No state is kept between messages; all chats share one registry.

use std::sync::Arc;

use async_trait::async_trait;
use file_registry::{file_stem, generated_name, FileRegistry, MediaKind};
use tokio::sync::RwLock;
use tracing::{info, instrument, warn};

use crate::commands::Command;
use crate::core::{Attachment, Chat, Handler, HandlerResponse, Message, Result};
use crate::gateway::Gateway;
use crate::markdown::{decode_deep_link, render_file_list, unescape_markdown_v2};
use crate::texts;

/// Handles uploads, `/list`, `/delete` and download deep links against the shared registry.
pub struct FileCommandHandler {
    registry: Arc<FileRegistry>,
    gateway: Gateway,
    bot_username: Arc<RwLock<Option<String>>>,
    /// Chat that receives a forwarded copy of every upload; 0 disables forwarding.
    archive_chat_id: i64,
}

impl FileCommandHandler {
    pub fn new(
        registry: Arc<FileRegistry>,
        gateway: Gateway,
        bot_username: Arc<RwLock<Option<String>>>,
        archive_chat_id: i64,
    ) -> Self {
        Self {
            registry,
            gateway,
            bot_username,
            archive_chat_id,
        }
    }

    async fn reply(&self, chat: &Chat, text: &str, success_log: &str) -> HandlerResponse {
        self.gateway.send_text(chat, text, success_log).await;
        HandlerResponse::Reply(text.to_string())
    }

    async fn dispatch(&self, message: &Message, command: Command) -> HandlerResponse {
        match command {
            Command::Download(payload) => self.download(&message.chat, &payload).await,
            Command::Help => self.help(&message.chat).await,
            Command::List => self.list(&message.chat).await,
            Command::Delete(argument) => self.delete(message, argument).await,
            Command::UploadHint => {
                self.reply(&message.chat, texts::UPLOAD_HINT, "Upload hint sent")
                    .await
            }
        }
    }

    /// Resolves a deep-link payload, each candidate as exact name then as stem: decoded first,
    /// then with underscores kept (`photo_<ts>`, `my_file`).
    async fn resolve(&self, payload: &str) -> Option<(String, String)> {
        let mut candidates = vec![decode_deep_link(payload)];
        for raw in [unescape_markdown_v2(payload), payload.to_string()] {
            if !candidates.contains(&raw) {
                candidates.push(raw);
            }
        }

        for candidate in candidates {
            if let Some(reference) = self.registry.get(&candidate).await {
                return Some((reference, candidate));
            }
            if let Some(found) = self.registry.find_by_stem(&candidate).await {
                return Some(found);
            }
        }
        None
    }

    #[instrument(skip(self, chat), fields(chat_id = chat.id))]
    async fn download(&self, chat: &Chat, payload: &str) -> HandlerResponse {
        let Some((reference, display_name)) = self.resolve(payload).await else {
            return self
                .reply(
                    chat,
                    texts::DOWNLOAD_NOT_FOUND,
                    &format!("Requested file not found: {}", payload),
                )
                .await;
        };

        let caption = file_stem(&display_name);
        let kind = MediaKind::of_display_name(&display_name);
        self.gateway
            .send_file(
                kind,
                chat,
                &reference,
                caption,
                &format!("Sent {:?} to user: {}", kind, caption),
            )
            .await;
        HandlerResponse::Stop
    }

    async fn help(&self, chat: &Chat) -> HandlerResponse {
        self.gateway
            .send_menu(
                chat,
                texts::MENU_READY,
                &texts::menu_keyboard(),
                "Menu keyboard sent",
            )
            .await;
        self.reply(chat, texts::WELCOME, "Welcome message sent").await
    }

    async fn list(&self, chat: &Chat) -> HandlerResponse {
        if self.registry.is_empty().await {
            return self
                .reply(chat, texts::NO_FILES, "Empty file list sent")
                .await;
        }

        let names = self.registry.list().await;
        let username = self.bot_username.read().await.clone().unwrap_or_default();
        if username.is_empty() {
            warn!("Bot username unknown; deep links will not resolve");
        }
        let pages = render_file_list(texts::LIST_HEADER, &names, &username);
        let page_count = pages.len();
        for (i, page) in pages.iter().enumerate() {
            self.gateway
                .send_markdown(
                    chat,
                    page,
                    &format!(
                        "File list sent ({} entries, page {}/{})",
                        names.len(),
                        i + 1,
                        page_count
                    ),
                )
                .await;
        }
        HandlerResponse::Stop
    }

    #[instrument(skip(self, message), fields(chat_id = message.chat.id))]
    async fn delete(&self, message: &Message, argument: Option<String>) -> HandlerResponse {
        let replied_name = Self::replied_document_name(message);

        let Some(name) = replied_name.or(argument) else {
            return self
                .reply(
                    &message.chat,
                    texts::DELETE_PROMPT,
                    "Asked user for a file name to delete",
                )
                .await;
        };

        if self.registry.remove(&name).await {
            self.reply(
                &message.chat,
                &texts::deleted(&name),
                &format!("File deleted: {}", name),
            )
            .await
        } else {
            self.reply(
                &message.chat,
                texts::DELETE_NOT_FOUND,
                &format!("File to delete not found: {}", name),
            )
            .await
        }
    }

    /// Registry name of the document the message replies to: its file name, or the generated
    /// `document_<ts>` name it was stored under when it had none.
    fn replied_document_name(message: &Message) -> Option<String> {
        match message.reply_to_attachment.as_ref()? {
            Attachment::Document { file_name, .. } => file_name
                .clone()
                .filter(|n| !n.is_empty())
                .or_else(|| {
                    message
                        .reply_to_date
                        .map(|date| generated_name(MediaKind::Document, date.timestamp()))
                }),
            _ => None,
        }
    }

    #[instrument(skip(self, message, attachment), fields(chat_id = message.chat.id, kind = attachment.kind_label()))]
    async fn upload(&self, message: &Message, attachment: &Attachment) -> HandlerResponse {
        let timestamp = message.created_at.timestamp();
        let (display_name, confirmation) = match attachment {
            Attachment::Document { file_name, .. } => (
                file_name
                    .clone()
                    .filter(|n| !n.is_empty())
                    .unwrap_or_else(|| generated_name(MediaKind::Document, timestamp)),
                texts::SAVE_OK,
            ),
            Attachment::Photo { .. } => {
                (generated_name(MediaKind::Photo, timestamp), texts::PHOTO_SAVED)
            }
            Attachment::Video { .. } => {
                (generated_name(MediaKind::Video, timestamp), texts::VIDEO_SAVED)
            }
        };

        self.registry.put(&display_name, attachment.file_id()).await;
        info!(file_name = %display_name, "Upload registered");

        let archived = self.archive(message, &display_name).await;
        match attachment {
            Attachment::Document { .. } if !archived => {
                self.reply(
                    &message.chat,
                    texts::SAVE_FAILED,
                    &format!("Failed to archive file: {}", display_name),
                )
                .await
            }
            _ => {
                self.reply(
                    &message.chat,
                    confirmation,
                    &format!("Saved: {}", display_name),
                )
                .await
            }
        }
    }

    /// Forwards the upload to the archive chat. True when forwarded or when archiving is off.
    async fn archive(&self, message: &Message, display_name: &str) -> bool {
        if self.archive_chat_id == 0 {
            return true;
        }
        self.gateway
            .forward(
                self.archive_chat_id,
                &message.chat,
                &message.id,
                &format!("Forwarded to archive chat: {}", display_name),
            )
            .await
    }
}

#[async_trait]
impl Handler for FileCommandHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id, message_id = %message.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if let Some(attachment) = &message.attachment {
            return Ok(self.upload(message, attachment).await);
        }

        let response = match Command::parse(&message.content) {
            Some(command) => self.dispatch(message, command).await,
            None => {
                self.reply(
                    &message.chat,
                    texts::INVALID_COMMAND,
                    "User sent an invalid command",
                )
                .await
            }
        };
        Ok(response)
    }
}
