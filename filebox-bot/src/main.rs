//! filebox binary: `run` starts the bot, `list` prints the cache file.

use anyhow::Result;
use clap::Parser;
use filebox_bot::{file_stem, run_bot, BotConfig, Cli, Commands, FileRegistryStore, JsonFileStore};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = BotConfig::load(&cli.config, token)?;
            run_bot(config).await
        }
        Commands::List => {
            let config = BotConfig::load(&cli.config, None)?;
            let store = JsonFileStore::new(config.cache_file_path());
            let entries = store.load().await?;
            if entries.is_empty() {
                println!("No files (cache: {}).", config.cache_file_path());
                return Ok(());
            }
            println!("{} file(s) in {}:\n", entries.len(), config.cache_file_path());
            println!("{:<4} {:<40} {}", "#", "name", "deep link stem");
            for (i, name) in entries.keys().enumerate() {
                println!("{:<4} {:<40} {}", i + 1, name, file_stem(name));
            }
            Ok(())
        }
    }
}
