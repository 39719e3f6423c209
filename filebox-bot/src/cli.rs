//! CLI parser.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_PATH;

#[derive(Parser)]
#[command(name = "filebox")]
#[command(about = "Telegram file archive bot", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the JSON config file (a template is written if it does not exist).
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot (token can override botToken / BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Print the stored files from the cache file, without connecting to Telegram.
    List,
}
