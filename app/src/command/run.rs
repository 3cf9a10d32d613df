use crate::command::CommandStrategy;
use blathers_config::{Config, Credentials};
use blathers_telegram::BlathersBot;
use std::path::PathBuf;
use tracing::info;

/// Input for the run command.
pub struct RunInput {
    /// Optional key file (overrides config)
    pub keys: Option<PathBuf>,
}

/// Strategy for running the Telegram bot.
pub struct RunStrategy;

impl CommandStrategy for RunStrategy {
    type Input = RunInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let keys_path = config.resolve_keys_path(input.keys)?;

        // A missing key file is not an error: the bot just does not start.
        let Some(credentials) = Credentials::load_if_present(&keys_path)? else {
            return Ok(());
        };
        info!("Loaded keys from {}", keys_path.display());

        info!("Starting Telegram bot...");
        let bot = BlathersBot::new(credentials, config.wiki)?;

        info!("Telegram bot is running. Press Ctrl+C to stop.");
        bot.run().await?;

        Ok(())
    }
}
