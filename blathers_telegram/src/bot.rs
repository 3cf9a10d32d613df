use crate::{Command, Responder, Result};
use blathers_config::Credentials;
use blathers_core::{WikiClient, WikiConfig};
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{info, warn};

/// Telegram bot answering villager questions from the wiki
#[derive(Clone)]
pub struct BlathersBot {
    /// Teloxide bot instance
    pub bot: Bot,
    /// Command adapter shared by every handler invocation
    pub responder: Arc<Responder<WikiClient>>,
    /// Bot id from the key file, checked against Telegram at start-up
    bot_id: String,
}

impl BlathersBot {
    pub fn new(credentials: Credentials, wiki: WikiConfig) -> Result<Self> {
        let client = WikiClient::new(wiki)?;

        Ok(Self {
            bot: Bot::new(credentials.bot_token),
            responder: Arc::new(Responder::new(client)),
            bot_id: credentials.bot_id,
        })
    }

    /// Check the token against Telegram once and log who we are.
    async fn log_in(&self) -> Result<()> {
        let me = self.bot.get_me().await?;
        let id = me.user.id.to_string();

        info!(
            "Logged in as @{} (id: {id})",
            me.user
                .username
                .clone()
                .unwrap_or_else(|| "no username".to_string())
        );

        if !self.bot_id.is_empty() && self.bot_id != id {
            warn!(
                "Key file bot id {} does not match Telegram bot id {id}",
                self.bot_id
            );
        }

        Ok(())
    }

    /// Run the bot until Ctrl+C
    pub async fn run(self) -> Result<()> {
        use teloxide::dispatching::{Dispatcher, UpdateFilterExt};
        use teloxide::dptree;
        use teloxide::types::Update;

        self.log_in().await?;

        self.bot.set_my_commands(Command::bot_commands()).await?;
        info!("Registered {} commands", Command::bot_commands().len());

        let bot = self.bot.clone();

        let schema = dptree::entry().branch(Update::filter_message().endpoint({
            let bot_clone = self.clone();
            move |_bot: Bot, msg: teloxide::types::Message| {
                let bot_clone = bot_clone.clone();
                async move { crate::handler::handle_message(bot_clone, msg).await }
            }
        }));

        Dispatcher::builder(bot, schema)
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;

        Ok(())
    }
}
