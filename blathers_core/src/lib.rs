#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod extract;
pub mod fetch;
pub mod lookup;
pub mod stats;

pub use error::{Error, Result};
pub use extract::{extract_fact, extract_image};
pub use fetch::{PageFetcher, WikiClient, WikiConfig, page_url};
pub use lookup::WikiLookup;
pub use stats::VILLAGER_STATS;

/// A single lookup request, created per chat command and dropped after the reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Villager name, used verbatim as the wiki page name
    pub entity_name: String,
    /// Statistic to look up; `None` for image lookups
    pub field_label: Option<String>,
}

impl Query {
    #[must_use]
    pub fn fact(entity_name: impl Into<String>, field_label: impl Into<String>) -> Self {
        Self {
            entity_name: entity_name.into(),
            field_label: Some(field_label.into()),
        }
    }

    #[must_use]
    pub fn image(entity_name: impl Into<String>) -> Self {
        Self {
            entity_name: entity_name.into(),
            field_label: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_constructors() {
        let q = Query::fact("Raymond", "Species");
        assert_eq!(q.entity_name, "Raymond");
        assert_eq!(q.field_label.as_deref(), Some("Species"));

        let q = Query::image("Raymond");
        assert!(q.field_label.is_none());
    }
}
