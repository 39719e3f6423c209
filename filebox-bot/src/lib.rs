//! # filebox bot
//!
//! Telegram bot that archives uploaded documents, photos and videos by file id and serves them
//! back through `/list` deep links. Core (Handler, Bot, Message), chain (HandlerChain),
//! dispatcher (FileCommandHandler) and telegram (teloxide adapters, polling loop).

pub mod chain;
pub mod cli;
pub mod commands;
pub mod components;
pub mod config;
pub mod core;
pub mod gateway;
pub mod handlers;
pub mod markdown;
pub mod runner;
pub mod telegram;
pub mod texts;

pub use cli::{Cli, Commands};

pub use core::{
    init_tracing, parse_message_id, Attachment, Bot, BotError, Chat, Handler, HandlerResponse,
    KeyboardLayout, Message, Result, ToCoreMessage, ToCoreUser, User,
};

pub use chain::HandlerChain;
pub use commands::Command;
pub use components::{build_bot_components, build_handler_chain, BotComponents};
pub use config::{BotConfig, FileConfig};
pub use gateway::Gateway;
pub use handlers::{FileCommandHandler, LoggingHandler};
pub use markdown::{
    decode_deep_link, deep_link_url, encode_deep_link, escape_markdown_v2, render_file_list,
};
pub use runner::{run_bot, FileBot};
pub use telegram::{run_polling, TelegramBotAdapter, TelegramMessageWrapper, TelegramUserWrapper};

pub use file_registry::{
    file_stem, FileRegistry, InMemoryStore, JsonFileStore, RegistryStore as FileRegistryStore,
};
