use anyhow::Context;
use std::path::Path;
use tracing::warn;

/// Bot credentials read from a key file of two `label: value` lines:
///
/// ```text
/// token: 123456:ABC-DEF
/// id: 123456
/// ```
#[derive(Clone)]
pub struct Credentials {
    pub bot_token: String,
    pub bot_id: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("bot_token", &"<redacted>")
            .field("bot_id", &self.bot_id)
            .finish()
    }
}

impl Credentials {
    /// Load credentials, or `None` with a warning when the file is missing.
    pub fn load_if_present(path: &Path) -> anyhow::Result<Option<Self>> {
        if !path.exists() {
            warn!("Keys not set ({} not found), bot will not start", path.display());
            return Ok(None);
        }
        Self::load(path).map(Some)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read key file {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid key file {}", path.display()))
    }

    /// Everything after the first `:` is the value, so tokens may contain colons.
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let mut values = content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                line.split_once(':')
                    .map(|(_, value)| value.trim().to_string())
                    .ok_or_else(|| anyhow::anyhow!("Expected `label: value`, got {line:?}"))
            });

        let bot_token = values
            .next()
            .ok_or_else(|| anyhow::anyhow!("Missing bot token line"))??;
        let bot_id = values
            .next()
            .ok_or_else(|| anyhow::anyhow!("Missing bot id line"))??;

        if bot_token.is_empty() {
            anyhow::bail!("Bot token is empty");
        }

        Ok(Self { bot_token, bot_id })
    }
}
