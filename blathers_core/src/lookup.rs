use tracing::{info, warn};

use crate::{PageFetcher, Query, extract_fact, extract_image};

/// Fetches a villager page and runs one extractor over it.
///
/// Fetch failures are logged and reported as a miss, the same as markup
/// that does not contain the requested data.
pub struct WikiLookup<F> {
    fetcher: F,
}

impl<F: PageFetcher> WikiLookup<F> {
    pub const fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Look up `query.field_label` on the villager's page.
    pub async fn fact(&self, query: &Query) -> Option<String> {
        let label = query.field_label.as_deref()?;
        let document = self.page(&query.entity_name).await?;

        let value = extract_fact(&document, label);
        info!(
            "Fact lookup {}/{label}: {}",
            query.entity_name,
            value.as_deref().unwrap_or("<not found>")
        );
        value
    }

    /// Look up the profile image URL for a villager.
    pub async fn image(&self, entity_name: &str) -> Option<String> {
        let document = self.page(entity_name).await?;

        let url = extract_image(&document);
        info!(
            "Image lookup {entity_name}: {}",
            url.as_deref().unwrap_or("<not found>")
        );
        url
    }

    async fn page(&self, entity_name: &str) -> Option<String> {
        match self.fetcher.fetch(entity_name).await {
            Ok(document) => Some(document),
            Err(e) => {
                warn!("Failed to fetch page for {entity_name}: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, Result};
    use async_trait::async_trait;
    use std::collections::HashMap;

    struct FixtureFetcher {
        pages: HashMap<&'static str, &'static str>,
    }

    #[async_trait]
    impl PageFetcher for FixtureFetcher {
        async fn fetch(&self, entity_name: &str) -> Result<String> {
            self.pages
                .get(entity_name)
                .map(|page| (*page).to_string())
                .ok_or_else(|| Error::Status {
                    status: 404,
                    url: format!("fixture://{entity_name}"),
                })
        }
    }

    fn lookup() -> WikiLookup<FixtureFetcher> {
        let mut pages = HashMap::new();
        pages.insert(
            "Raymond",
            r#"<aside><h3>Personality</h3><div>Smug</div></aside>
<figure><a href="https://example/raymond.png/revision/latest">x</a></figure>"#,
        );
        WikiLookup::new(FixtureFetcher { pages })
    }

    #[tokio::test]
    async fn test_fact_found() {
        let value = lookup()
            .fact(&Query::fact("Raymond", "Personality"))
            .await;
        assert_eq!(value.as_deref(), Some("Smug"));
    }

    #[tokio::test]
    async fn test_fact_without_label() {
        assert_eq!(lookup().fact(&Query::image("Raymond")).await, None);
    }

    #[tokio::test]
    async fn test_fetch_failure_is_a_miss() {
        assert_eq!(lookup().fact(&Query::fact("Nobody", "Species")).await, None);
        assert_eq!(lookup().image("Nobody").await, None);
    }

    #[tokio::test]
    async fn test_image_found() {
        assert_eq!(
            lookup().image("Raymond").await.as_deref(),
            Some("https://example/raymond.png")
        );
    }
}
