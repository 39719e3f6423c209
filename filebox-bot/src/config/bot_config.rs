//! BotConfig: the JSON config file plus environment overrides. Use load() then validate().

use anyhow::Result;
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::file_config::{FileConfig, PLACEHOLDER_TOKEN};

/// Default config file location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Resolved bot configuration.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub file: FileConfig,
    pub path: PathBuf,
}

impl BotConfig {
    /// Loads the config file (creating a template if absent), then applies overrides:
    /// `token` (CLI) > `BOT_TOKEN`; `TELEGRAM_API_URL` or `TELOXIDE_API_URL`; `LOG_FILE`.
    pub fn load(path: &Path, token: Option<String>) -> Result<Self> {
        let mut file = FileConfig::load_or_create(path)?;

        if let Some(bot_token) = token.or_else(|| env::var("BOT_TOKEN").ok()) {
            file.bot_token = bot_token;
        }
        if let Ok(url) = env::var("TELEGRAM_API_URL").or_else(|_| env::var("TELOXIDE_API_URL")) {
            file.telegram_api_url = Some(url);
        }
        if let Ok(log_file) = env::var("LOG_FILE") {
            file.log_file = log_file;
        }

        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    /// Validate config before connecting. Call after load() to fail fast.
    pub fn validate(&self) -> Result<()> {
        let token = self.bot_token().trim();
        if token.is_empty() || token == PLACEHOLDER_TOKEN {
            anyhow::bail!(
                "botToken is not set in {} (or via BOT_TOKEN / --token)",
                self.path.display()
            );
        }
        if let Some(url_str) = self.telegram_api_url() {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!("telegramApiUrl is set but not a valid URL: {}", url_str);
            }
        }
        if let Some(url_str) = self.proxy_url() {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!("proxyUrl is set but not a valid URL: {}", url_str);
            }
        }
        if self.file.poll_timeout_secs == 0 {
            anyhow::bail!("pollTimeoutSecs must be greater than 0");
        }
        Ok(())
    }

    pub fn bot_token(&self) -> &str {
        &self.file.bot_token
    }
    /// Configured username, None when empty.
    pub fn bot_username(&self) -> Option<&str> {
        Some(self.file.bot_username.trim()).filter(|u| !u.is_empty())
    }
    pub fn archive_chat_id(&self) -> i64 {
        self.file.private_chat_id
    }
    pub fn cache_file_path(&self) -> &str {
        &self.file.cache_file_path
    }
    pub fn proxy_url(&self) -> Option<&str> {
        self.file.proxy_url.as_deref()
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.file.telegram_api_url.as_deref()
    }
    pub fn log_file(&self) -> &str {
        &self.file.log_file
    }
    pub fn poll_timeout(&self) -> Duration {
        Duration::from_secs(self.file.poll_timeout_secs)
    }
}
