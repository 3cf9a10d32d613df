use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use blathers_core::WikiConfig;

const CONFIG_DIR: &str = "blathers";
const CONFIG_FILE: &str = "config.json";
const KEYS_FILE: &str = "keys.txt";

#[derive(Debug, Default, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub wiki: WikiConfig,
    /// Credential file; falls back to `~/blathers/keys.txt`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keys_path: Option<PathBuf>,
}

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join(CONFIG_DIR))
    }

    /// Load `~/blathers/config.json`, using defaults when it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_dir()?.join(CONFIG_FILE);

        if !config_path.exists() {
            tracing::debug!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Pick the credential file: explicit override, then config, then the default location.
    pub fn resolve_keys_path(&self, cli_override: Option<PathBuf>) -> anyhow::Result<PathBuf> {
        if let Some(path) = cli_override.or_else(|| self.keys_path.clone()) {
            return Ok(path);
        }
        Ok(Self::config_dir()?.join(KEYS_FILE))
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    /// Default config pointing at the key file inside `config_dir`.
    #[must_use]
    pub fn template(config_dir: &Path) -> Self {
        Self {
            wiki: WikiConfig::default(),
            keys_path: Some(config_dir.join(KEYS_FILE)),
        }
    }

    /// Write the template to `~/blathers/config.json`; refuses to overwrite.
    pub fn create_config() -> anyhow::Result<PathBuf> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        let content = serde_json::to_string_pretty(&Self::template(&config_dir))?;
        std::fs::write(&config_path, content)?;

        println!("Created config file at: {}", config_path.display());
        println!();
        println!("Next steps:");
        println!(
            "   1. Create {} with two lines:",
            config_dir.join(KEYS_FILE).display()
        );
        println!("        token: <telegram bot token>");
        println!("        id: <bot id>");
        println!("   2. Run 'blathers run' to start the bot");
        println!();
        Ok(config_path)
    }
}
