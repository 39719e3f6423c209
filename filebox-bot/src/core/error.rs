//! Error types for the bot core.
//!
//! [`BotError`] covers gateway and registry failures. User mistakes (unknown file,
//! missing argument) are not errors: handlers answer them with a text reply.

use file_registry::RegistryError;
use thiserror::Error;

/// Top-level error for the bot.
#[derive(Error, Debug)]
pub enum BotError {
    /// A Telegram API call failed (network or API error).
    #[error("Gateway error: {0}")]
    Gateway(String),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
}

/// Result type for core operations; uses [`BotError`].
pub type Result<T> = std::result::Result<T, BotError>;
