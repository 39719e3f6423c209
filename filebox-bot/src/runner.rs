use anyhow::Result;
use file_registry::RegistryStore;
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::chain::HandlerChain;
use crate::components::{build_bot_components, build_handler_chain, json_store, BotComponents};
use crate::config::BotConfig;
use crate::core::{init_tracing, Bot, Message as CoreMessage, ToCoreMessage};
use crate::telegram::{run_polling, TelegramMessageWrapper};

/// FileBot: config, components, and handler chain, without the polling loop.
pub struct FileBot {
    pub config: BotConfig,
    pub components: BotComponents,
    pub handler_chain: HandlerChain,
}

impl FileBot {
    /// Builds the bot over the configured JSON cache file.
    pub async fn new(config: BotConfig) -> Result<Self> {
        let store = json_store(&config);
        Self::with_store(config, store, None).await
    }

    /// Builds the bot with a custom store and, optionally, a custom gateway (e.g. for tests).
    pub async fn with_store(
        config: BotConfig,
        store: Arc<dyn RegistryStore>,
        handler_bot_override: Option<Arc<dyn Bot>>,
    ) -> Result<Self> {
        let components = build_bot_components(&config, store, handler_bot_override).await?;
        let handler_chain = build_handler_chain(&components);
        Ok(Self {
            config,
            components,
            handler_chain,
        })
    }

    /// Handles one Telegram message.
    pub async fn handle_message(&self, msg: &teloxide::types::Message) -> Result<()> {
        let core_msg = TelegramMessageWrapper(msg).to_core();
        self.handle_core_message(&core_msg).await
    }

    /// Drives the handler chain with a core Message. Chain errors are logged, not returned.
    pub async fn handle_core_message(&self, message: &CoreMessage) -> Result<()> {
        if let Err(e) = self.handler_chain.handle(message).await {
            error!(error = %e, chat_id = message.chat.id, "Handler chain failed");
        }
        Ok(())
    }
}

/// Main entry: validate config, init logging, build components, then poll until Ctrl-C.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(Some(config.log_file()))?;

    info!(
        config_path = %config.path.display(),
        cache_file = %config.cache_file_path(),
        archive_chat_id = config.archive_chat_id(),
        "Initializing bot"
    );

    let bot = FileBot::new(config).await?;
    let teloxide_bot = bot.components.teloxide_bot.clone();
    let bot_username = bot.components.bot_username.clone();
    let poll_timeout = bot.config.poll_timeout();

    info!("Bot started successfully");

    run_polling(teloxide_bot, bot.handler_chain, bot_username, poll_timeout).await
}
