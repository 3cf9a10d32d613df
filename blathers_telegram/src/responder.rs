use async_trait::async_trait;
use blathers_core::{PageFetcher, Query, WikiLookup};
use tracing::info;

use crate::{Command, Result};

pub const ACK_TEXT: &str = "Let me find that for you...";
pub const IMAGE_MISS_TEXT: &str =
    "Hm, seems like there are not any pictures of this person I can find";
pub const STATS_USAGE_TEXT: &str = "Usage: !ac_stats <villager_name> <statistic>";
pub const IMAGE_USAGE_TEXT: &str = "Usage: !ac_image <villager_name>";

/// Where replies to a command go.
#[async_trait]
pub trait ReplySink: Send + Sync {
    async fn say(&self, text: String) -> Result<()>;
}

/// Maps chat commands to wiki lookups and formats the replies.
pub struct Responder<F> {
    lookup: WikiLookup<F>,
}

impl<F: PageFetcher> Responder<F> {
    pub const fn new(fetcher: F) -> Self {
        Self {
            lookup: WikiLookup::new(fetcher),
        }
    }

    /// Handle `text` if it is a known command. Returns `false` for anything else.
    pub async fn respond<S: ReplySink + ?Sized>(&self, text: &str, sink: &S) -> Result<bool> {
        let Some(cmd) = Command::parse_from_text(text) else {
            return Ok(false);
        };
        self.execute(cmd, sink).await?;
        Ok(true)
    }

    pub async fn execute<S: ReplySink + ?Sized>(&self, cmd: Command, sink: &S) -> Result<()> {
        match cmd {
            Command::Stats(args) => self.stats(&args, sink).await,
            Command::Image(args) => self.image(&args, sink).await,
            Command::HelpCharacteristics => sink.say(Command::characteristics_text()).await,
        }
    }

    async fn stats<S: ReplySink + ?Sized>(&self, args: &[String], sink: &S) -> Result<()> {
        let Some((villager, stat)) = args.split_first().filter(|(_, rest)| !rest.is_empty())
        else {
            return sink.say(STATS_USAGE_TEXT.to_string()).await;
        };

        sink.say(ACK_TEXT.to_string()).await?;

        let stat = stat.join(" ");
        info!("Stats request: {villager} / {stat}");

        let reply = match self.lookup.fact(&Query::fact(villager.as_str(), stat.as_str())).await {
            Some(value) => fact_reply(&stat, villager, &value),
            None => fact_miss_reply(&stat, villager),
        };
        sink.say(reply).await
    }

    async fn image<S: ReplySink + ?Sized>(&self, args: &[String], sink: &S) -> Result<()> {
        let Some(villager) = args.first() else {
            return sink.say(IMAGE_USAGE_TEXT.to_string()).await;
        };

        info!("Image request: {villager}");

        let reply = match self.lookup.image(villager).await {
            Some(url) => image_reply(&url),
            None => IMAGE_MISS_TEXT.to_string(),
        };
        sink.say(reply).await
    }
}

fn fact_reply(stat: &str, villager: &str, value: &str) -> String {
    format!("The {} of {villager} is: {value}", stat.to_lowercase())
}

fn fact_miss_reply(stat: &str, villager: &str) -> String {
    format!(
        "Sorry I could not find the {} of {villager} for you.",
        stat.to_lowercase()
    )
}

fn image_reply(url: &str) -> String {
    format!("Hey, this seems like a picture of someone I know...\n{url}")
}
