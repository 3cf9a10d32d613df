use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

use crate::{Error, Result};

/// Wiki fetch configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WikiConfig {
    /// Page root; the villager name is appended as-is
    #[serde(default = "WikiConfig::default_root")]
    pub root: String,

    /// Request timeout (seconds)
    #[serde(default = "WikiConfig::default_timeout")]
    pub timeout: u64,

    /// User-Agent header
    #[serde(default = "WikiConfig::default_user_agent")]
    pub user_agent: String,
}

impl WikiConfig {
    fn default_root() -> String {
        "https://animalcrossing.fandom.com/wiki/".to_string()
    }

    const fn default_timeout() -> u64 {
        10
    }

    fn default_user_agent() -> String {
        "Mozilla/5.0 (compatible; blathers/1.0)".to_string()
    }
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            root: Self::default_root(),
            timeout: Self::default_timeout(),
            user_agent: Self::default_user_agent(),
        }
    }
}

/// Build the page URL for a villager. No escaping is applied to the name.
#[must_use]
pub fn page_url(root: &str, entity_name: &str) -> String {
    format!("{root}{entity_name}")
}

/// Retrieves raw page markup for a villager name.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, entity_name: &str) -> Result<String>;
}

/// Fetches pages from the fandom wiki over HTTP.
pub struct WikiClient {
    client: Client,
    config: WikiConfig,
}

impl WikiClient {
    pub fn new(config: WikiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client, config })
    }

    #[must_use]
    pub fn page_url(&self, entity_name: &str) -> String {
        page_url(&self.config.root, entity_name)
    }
}

#[async_trait]
impl PageFetcher for WikiClient {
    async fn fetch(&self, entity_name: &str) -> Result<String> {
        let url = self.page_url(entity_name);
        info!("Fetching {url}");

        let response = self
            .client
            .get(&url)
            .header("Accept", "text/html")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        debug!("Fetched {} bytes from {url}", body.len());
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wiki_config_default() {
        let config = WikiConfig::default();
        assert_eq!(config.root, "https://animalcrossing.fandom.com/wiki/");
        assert_eq!(config.timeout, 10);
        assert!(config.user_agent.contains("blathers"));
    }

    #[test]
    fn test_page_url_concatenates_without_escaping() {
        assert_eq!(
            page_url("https://animalcrossing.fandom.com/wiki/", "Raymond"),
            "https://animalcrossing.fandom.com/wiki/Raymond"
        );
        assert_eq!(page_url("http://wiki/", "Agent S"), "http://wiki/Agent S");
    }

    #[test]
    fn test_wiki_client_new() {
        let Ok(client) = WikiClient::new(WikiConfig::default()) else {
            panic!("Failed to create WikiClient");
        };
        assert_eq!(
            client.page_url("Marshal"),
            "https://animalcrossing.fandom.com/wiki/Marshal"
        );
    }
}
