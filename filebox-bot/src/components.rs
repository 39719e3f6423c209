//! Component factory: builds BotComponents from config. Isolates assembly logic from runner.

use anyhow::{Context, Result};
use file_registry::{FileRegistry, JsonFileStore, RegistryStore};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::chain::HandlerChain;
use crate::config::BotConfig;
use crate::core::Bot as CoreBot;
use crate::gateway::Gateway;
use crate::handlers::{FileCommandHandler, LoggingHandler};
use crate::telegram::TelegramBotAdapter;

/// Dependencies shared by the runner and the handlers.
#[derive(Clone)]
pub struct BotComponents {
    pub teloxide_bot: teloxide::Bot,
    pub registry: Arc<FileRegistry>,
    /// Gateway the handlers send through; the teloxide adapter unless overridden in tests.
    pub handler_bot: Arc<dyn CoreBot>,
    pub bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
    pub archive_chat_id: i64,
}

/// Builds the teloxide client: optional proxy (through teloxide's default reqwest settings)
/// and optional API base URL.
pub fn build_teloxide_bot(config: &BotConfig) -> Result<teloxide::Bot> {
    let bot = match config.proxy_url() {
        Some(proxy_url) => {
            let proxy = reqwest::Proxy::all(proxy_url)
                .with_context(|| format!("Invalid proxyUrl: {}", proxy_url))?;
            let client = teloxide::net::default_reqwest_settings()
                .proxy(proxy)
                .build()
                .context("Failed to build HTTP client with proxy")?;
            info!(proxy = %proxy_url, "Proxy mode enabled");
            teloxide::Bot::with_client(config.bot_token(), client)
        }
        None => teloxide::Bot::new(config.bot_token()),
    };

    match config.telegram_api_url() {
        Some(url_str) => {
            let url = reqwest::Url::parse(url_str)
                .with_context(|| format!("Invalid telegramApiUrl: {}", url_str))?;
            Ok(bot.set_api_url(url))
        }
        None => Ok(bot),
    }
}

/// Opens the registry over `store`, wires the gateway and returns the components.
/// `handler_bot_override` replaces the teloxide adapter (tests inject a mock gateway).
#[instrument(skip(config, store, handler_bot_override))]
pub async fn build_bot_components(
    config: &BotConfig,
    store: Arc<dyn RegistryStore>,
    handler_bot_override: Option<Arc<dyn CoreBot>>,
) -> Result<BotComponents> {
    let teloxide_bot = build_teloxide_bot(config)?;
    let registry = Arc::new(FileRegistry::open(store).await);
    let handler_bot = handler_bot_override
        .unwrap_or_else(|| Arc::new(TelegramBotAdapter::new(teloxide_bot.clone())));
    let bot_username = Arc::new(tokio::sync::RwLock::new(
        config.bot_username().map(str::to_string),
    ));

    Ok(BotComponents {
        teloxide_bot,
        registry,
        handler_bot,
        bot_username,
        archive_chat_id: config.archive_chat_id(),
    })
}

/// Store for the configured cache file.
pub fn json_store(config: &BotConfig) -> Arc<dyn RegistryStore> {
    Arc::new(JsonFileStore::new(config.cache_file_path()))
}

/// Builds the handler chain (logging → file commands).
pub fn build_handler_chain(components: &BotComponents) -> HandlerChain {
    let file_handler = FileCommandHandler::new(
        components.registry.clone(),
        Gateway::new(components.handler_bot.clone()),
        components.bot_username.clone(),
        components.archive_chat_id,
    );
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(file_handler))
}
