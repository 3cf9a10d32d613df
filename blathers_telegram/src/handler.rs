use async_trait::async_trait;
use teloxide::{
    Bot,
    requests::Requester,
    types::{ChatId, Message},
};
use tracing::{debug, info};

use crate::{BlathersBot, ReplySink, Result};

/// Sends replies back to the chat a command came from.
pub struct ChatReplies {
    bot: Bot,
    chat_id: ChatId,
}

impl ChatReplies {
    #[must_use]
    pub const fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }
}

#[async_trait]
impl ReplySink for ChatReplies {
    async fn say(&self, text: String) -> Result<()> {
        self.bot.send_message(self.chat_id, text).await?;
        Ok(())
    }
}

/// Handle any message; only recognised commands get a reply.
pub async fn handle_message(bot: BlathersBot, msg: Message) -> Result<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let username = msg
        .from
        .as_ref()
        .and_then(|u| u.username.as_deref())
        .unwrap_or("unknown");

    let replies = ChatReplies::new(bot.bot.clone(), msg.chat.id);
    if bot.responder.respond(text, &replies).await? {
        info!("[@{username}] Command: {text}");
    } else {
        debug!("[@{username}] Ignored message");
    }

    Ok(())
}
