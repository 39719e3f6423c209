//! Update loop: long-polls Telegram and feeds each message to the HandlerChain, strictly one at a
//! time in delivery order. Resolves the bot username with getMe when it is not configured.

use crate::chain::HandlerChain;
use crate::core::ToCoreMessage;
use anyhow::Result;
use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;
use teloxide::update_listeners::Polling;
use tracing::{error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;

/// Runs the update loop until Ctrl-C.
///
/// Every update maps to the same distribution key, so the next message is not handled until
/// the previous chain run has returned.
#[instrument(skip(bot, handler_chain, bot_username))]
pub async fn run_polling(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
    poll_timeout: Duration,
) -> Result<()> {
    resolve_username(&bot, &bot_username).await;

    let handler = Update::filter_message().endpoint(move |msg: Message| {
        let chain = handler_chain.clone();
        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();
            if let Err(e) = chain.handle(&core_msg).await {
                error!(
                    error = %e,
                    user_id = core_msg.user.id,
                    chat_id = core_msg.chat.id,
                    "Handler chain failed"
                );
            }
            Ok::<(), Infallible>(())
        }
    });

    let listener = Polling::builder(bot.clone()).timeout(poll_timeout).build();

    info!(timeout_secs = poll_timeout.as_secs(), "Start polling");
    Dispatcher::builder(bot, handler)
        .distribution_function(|_| Some(()))
        .enable_ctrlc_handler()
        .build()
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("Error from the update listener"),
        )
        .await;

    warn!("Dispatcher stopped");
    Ok(())
}

/// Fills `bot_username` from getMe when config left it empty.
async fn resolve_username(
    bot: &teloxide::Bot,
    bot_username: &Arc<tokio::sync::RwLock<Option<String>>>,
) {
    if bot_username.read().await.is_some() {
        return;
    }
    match bot.get_me().await {
        Ok(me) => match &me.user.username {
            Some(username) => {
                *bot_username.write().await = Some(username.clone());
                info!(username = %username, "Bot username set from getMe");
            }
            None => warn!("getMe returned no username; deep links will be empty"),
        },
        Err(e) => error!(error = %e, "getMe failed; deep links will be empty"),
    }
}
