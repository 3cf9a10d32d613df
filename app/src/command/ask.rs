use crate::command::CommandStrategy;
use async_trait::async_trait;
use blathers_config::Config;
use blathers_core::WikiClient;
use blathers_telegram::{ReplySink, Responder};
use std::io::Write;

/// Input for the ask command.
pub struct AskInput {
    /// Chat message, e.g. `!ac_image raymond`
    pub message: String,
}

/// Prints each reply on stdout.
struct StdoutReplies;

#[async_trait]
impl ReplySink for StdoutReplies {
    async fn say(&self, text: String) -> blathers_telegram::Result<()> {
        writeln!(std::io::stdout().lock(), "{text}")?;
        Ok(())
    }
}

/// Strategy for answering a single chat command from the terminal.
pub struct AskStrategy;

impl CommandStrategy for AskStrategy {
    type Input = AskInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let responder = Responder::new(WikiClient::new(config.wiki)?);

        if !responder.respond(&input.message, &StdoutReplies).await? {
            anyhow::bail!(
                "Not a command: {:?}. Try !ac_stats, !ac_image or !help_characteristics",
                input.message
            );
        }

        Ok(())
    }
}
