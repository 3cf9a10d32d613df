use blathers_core::VILLAGER_STATS;
use teloxide::types::BotCommand;

/// A chat command with its normalized arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `!ac_stats <villager> <statistic...>`
    Stats(Vec<String>),
    /// `!ac_image <villager>`
    Image(Vec<String>),
    /// `!help_characteristics`
    HelpCharacteristics,
}

/// A message split into its command token and arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitMessage {
    pub command: String,
    pub args: Vec<String>,
}

/// Split a message on whitespace and capitalize every token after the command.
///
/// Names on the wiki are capitalized, so `raymond species` becomes
/// `["Raymond", "Species"]`. The rest of each token is lowercased.
#[must_use]
pub fn split_message(text: &str) -> SplitMessage {
    let mut tokens = text.split_whitespace();
    let command = tokens.next().unwrap_or_default().to_string();
    let args = tokens.map(capitalize).collect();

    SplitMessage { command, args }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect()
    })
}

impl Command {
    /// Commands registered with Telegram's command menu.
    #[must_use]
    pub fn bot_commands() -> Vec<BotCommand> {
        vec![
            BotCommand::new("ac_stats", "<villager> <statistic> - tell you a fact about a villager"),
            BotCommand::new("ac_image", "<villager> - show a villager's picture"),
            BotCommand::new("help_characteristics", "list the statistics you can ask about"),
        ]
    }

    /// Parse `!command args...`. A `/` prefix and a trailing `@botname` are also accepted.
    #[must_use]
    pub fn parse_from_text(text: &str) -> Option<Self> {
        let SplitMessage { command, args } = split_message(text);

        let name = command
            .strip_prefix('!')
            .or_else(|| command.strip_prefix('/'))?;
        let name = name.split('@').next().unwrap_or(name).to_lowercase();

        match name.as_str() {
            "ac_stats" => Some(Self::Stats(args)),
            "ac_image" => Some(Self::Image(args)),
            "help_characteristics" => Some(Self::HelpCharacteristics),
            _ => None,
        }
    }

    #[must_use]
    pub fn characteristics_text() -> String {
        format!(
            "```The available characteristics to choose from are: \n{}```",
            VILLAGER_STATS.join("\n")
        )
    }
}
