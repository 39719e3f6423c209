//! On-disk JSON config. A missing file is replaced by a template with placeholder values.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Token written into a freshly created template; rejected by validation.
pub const PLACEHOLDER_TOKEN: &str = "YOUR_BOT_TOKEN";

fn default_cache_file_path() -> String {
    "file_cache.json".to_string()
}

fn default_log_file() -> String {
    "logs/filebox-bot.log".to_string()
}

fn default_poll_timeout_secs() -> u64 {
    60
}

/// Fields of the config file (camelCase keys).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileConfig {
    pub bot_token: String,
    /// Used in deep links; empty means "ask getMe at startup".
    #[serde(default)]
    pub bot_username: String,
    /// Archive chat that receives forwarded uploads; 0 disables forwarding.
    #[serde(rename = "privateChatID", default)]
    pub private_chat_id: i64,
    #[serde(default = "default_cache_file_path")]
    pub cache_file_path: String,
    /// HTTP(S) proxy for all Bot API requests, e.g. `http://127.0.0.1:7890`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_url: Option<String>,
    /// Alternative Bot API base URL (local Bot API server or a mock in tests).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram_api_url: Option<String>,
    #[serde(default = "default_log_file")]
    pub log_file: String,
    /// Long-poll timeout for getUpdates.
    #[serde(default = "default_poll_timeout_secs")]
    pub poll_timeout_secs: u64,
}

impl FileConfig {
    /// Template written when no config file exists.
    pub fn placeholder() -> Self {
        Self {
            bot_token: PLACEHOLDER_TOKEN.to_string(),
            bot_username: "your_bot_username".to_string(),
            private_chat_id: 0,
            cache_file_path: default_cache_file_path(),
            proxy_url: None,
            telegram_api_url: None,
            log_file: default_log_file(),
            poll_timeout_secs: default_poll_timeout_secs(),
        }
    }

    /// Reads `path`. When it does not exist, writes [`FileConfig::placeholder`] there and fails,
    /// asking the operator to fill it in.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if !path.exists() {
            Self::placeholder().write(path)?;
            anyhow::bail!(
                "Config file {} not found; a template was written. Fill in botToken, botUsername and privateChatID, then restart.",
                path.display()
            );
        }

        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&data)
            .with_context(|| format!("Malformed config file {}", path.display()))
    }

    /// Writes the config as pretty JSON, creating parent directories.
    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(self)?;
        std::fs::write(path, data)
            .with_context(|| format!("Failed to write config file {}", path.display()))
    }
}
