//! Telegram transport: teloxide adapters, the [`crate::core::Bot`] implementation and the
//! sequential polling loop.

mod adapters;
mod bot_adapter;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use runner::run_polling;
