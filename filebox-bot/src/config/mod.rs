//! Bot configuration: JSON config file ([`FileConfig`]) + environment overrides ([`BotConfig`]).

mod bot_config;
mod file_config;


pub use bot_config::{BotConfig, DEFAULT_CONFIG_PATH};
pub use file_config::{FileConfig, PLACEHOLDER_TOKEN};
