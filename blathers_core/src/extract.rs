//! Text extraction over wiki page markup.
//!
//! Both extractors are best effort. The fandom layout is third-party markup
//! with no stable contract, so `None` is the expected result whenever the
//! page structure changes.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use tracing::debug;

/// Region holding the villager's statistics
#[allow(clippy::expect_used)]
static STATS_BLOCK: Lazy<Selector> =
    Lazy::new(|| Selector::parse("aside").expect("valid selector"));

/// Region holding the profile image link
#[allow(clippy::expect_used)]
static FIGURE_BLOCK: Lazy<Selector> =
    Lazy::new(|| Selector::parse("figure").expect("valid selector"));

/// Text between a closing `>` and the next `<`
#[allow(clippy::expect_used)]
static TEXT_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r">(.*?)<").expect("valid regex"));

#[allow(clippy::expect_used)]
static HREF_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"href="(.*?)""#).expect("valid regex"));

/// Each statistic in the block starts with its own heading.
const HEADING_BOUNDARY: &str = "<h3";

/// Image links on the wiki carry a revision path after the file name.
const REVISION_MARKER: &str = "/revision";

/// Find the value of `field_label` in the page's statistics block.
///
/// The block is split at every heading. The first segment whose leading text
/// run equals the label (ignoring case) decides the result: its first
/// non-empty later run is the value, and if it has none the lookup is a miss.
#[must_use]
pub fn extract_fact(document: &str, field_label: &str) -> Option<String> {
    let label = field_label.trim().to_lowercase();
    if label.is_empty() {
        return None;
    }

    let html = Html::parse_document(document);
    let block = html
        .select(&STATS_BLOCK)
        .map(|el| el.html())
        .collect::<Vec<_>>()
        .join("\n");

    block
        .split(HEADING_BOUNDARY)
        .filter(|segment| segment.to_lowercase().contains(&label))
        .find_map(|segment| {
            let runs = text_runs(segment);
            debug!("Located: {runs:?}");

            let (first, rest) = runs.split_first()?;
            if first.trim().to_lowercase() != label {
                return None;
            }

            Some(
                rest.iter()
                    .map(|run| decode_entities(run))
                    .find(|value| !value.trim().is_empty())
                    .map(|value| value.trim().to_string()),
            )
        })
        .flatten()
}

/// Find the profile image URL in the page's figure blocks.
///
/// Takes the first `href` inside a figure and cuts it at the revision suffix.
#[must_use]
pub fn extract_image(document: &str) -> Option<String> {
    let html = Html::parse_document(document);

    let href = html.select(&FIGURE_BLOCK).find_map(|figure| {
        let markup = figure.html();
        HREF_RE
            .captures(&markup)
            .and_then(|caps| caps.get(1))
            .map(|m| decode_entities(m.as_str()))
    })?;

    let url = href
        .find(REVISION_MARKER)
        .map_or(href.as_str(), |idx| &href[..idx]);

    if url.is_empty() {
        None
    } else {
        Some(url.to_string())
    }
}

fn text_runs(segment: &str) -> Vec<&str> {
    TEXT_RUN_RE
        .captures_iter(segment)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Undo the escaping applied when a region is serialized back to markup.
fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAYMOND: &str = r#"<html><body>
<aside class="portable-infobox pi-background">
<h2 class="pi-item pi-title" data-source="name">Raymond</h2>
<figure class="pi-item pi-image" data-source="image">
<a href="https://static.wikia.nocookie.net/animalcrossing/images/Raymond_NH.png/revision/latest?cb=2020" class="image image-thumbnail" title="Raymond"><img src="https://static.wikia.nocookie.net/animalcrossing/images/Raymond_NH.png/revision/latest/scale-to-width-down/268?cb=2020" alt="Raymond NH"></a>
</figure>
<div class="pi-item pi-data" data-source="gender"><h3 class="pi-data-label pi-secondary-font">Gender</h3><div class="pi-data-value pi-font">Male</div></div>
<div class="pi-item pi-data" data-source="personality"><h3 class="pi-data-label pi-secondary-font">Personality</h3><div class="pi-data-value pi-font"><a href="/wiki/Smug" title="Smug">Smug</a></div></div>
<div class="pi-item pi-data" data-source="species"><h3 class="pi-data-label pi-secondary-font">Species</h3><div class="pi-data-value pi-font"><a href="/wiki/Cat" title="Cat">Cat</a></div></div>
<div class="pi-item pi-data" data-source="phrase"><h3 class="pi-data-label pi-secondary-font">Initial phrase</h3><div class="pi-data-value pi-font">crisp</div></div>
<div class="pi-item pi-data" data-source="coffee"><h3 class="pi-data-label pi-secondary-font">Coffee</h3><div class="pi-data-value pi-font"> </div></div>
<div class="pi-item pi-data" data-source="song"><h3 class="pi-data-label pi-secondary-font">Favourite Song</h3><div class="pi-data-value pi-font">K.K. Ska &amp; Jazz</div></div>
</aside>
<p>Raymond is a smug cat villager. His species is cat.</p>
</body></html>"#;

    #[test]
    fn test_extract_fact_simple_block() {
        let doc = "<aside><h3>Species</h3><div>Cat</div></aside>";
        assert_eq!(extract_fact(doc, "species").as_deref(), Some("Cat"));
    }

    #[test]
    fn test_extract_fact_case_insensitive() {
        assert_eq!(extract_fact(RAYMOND, "species").as_deref(), Some("Cat"));
        assert_eq!(extract_fact(RAYMOND, "SPECIES").as_deref(), Some("Cat"));
        assert_eq!(extract_fact(RAYMOND, "Personality").as_deref(), Some("Smug"));
        assert_eq!(extract_fact(RAYMOND, "gender").as_deref(), Some("Male"));
    }

    #[test]
    fn test_extract_fact_multi_word_label() {
        assert_eq!(
            extract_fact(RAYMOND, "Initial Phrase").as_deref(),
            Some("crisp")
        );
    }

    #[test]
    fn test_extract_fact_decodes_entities() {
        assert_eq!(
            extract_fact(RAYMOND, "favourite song").as_deref(),
            Some("K.K. Ska & Jazz")
        );
    }

    #[test]
    fn test_extract_fact_label_without_value() {
        assert_eq!(extract_fact(RAYMOND, "coffee"), None);
        let doc = "<aside><h3>Species</h3><div></div></aside>";
        assert_eq!(extract_fact(doc, "species"), None);
    }

    #[test]
    fn test_extract_fact_nbsp_cell_is_empty() {
        let doc = "<aside><h3>Coffee</h3><div>&nbsp;</div></aside>";
        assert_eq!(extract_fact(doc, "coffee"), None);

        let doc = "<aside><h3>Coffee</h3><div>\u{a0}</div></aside>";
        assert_eq!(extract_fact(doc, "coffee"), None);
    }

    #[test]
    fn test_extract_fact_skips_nbsp_cell() {
        let doc = "<aside><h3>Coffee</h3><div>&nbsp;</div><div>Latte</div></aside>";
        assert_eq!(extract_fact(doc, "coffee").as_deref(), Some("Latte"));
    }

    #[test]
    fn test_extract_fact_unknown_label() {
        assert_eq!(extract_fact(RAYMOND, "birthday"), None);
    }

    #[test]
    fn test_extract_fact_empty_label() {
        assert_eq!(extract_fact(RAYMOND, "  "), None);
    }

    #[test]
    fn test_extract_fact_no_stats_block() {
        let doc = "<html><body><h3>Species</h3><div>Cat</div></body></html>";
        assert_eq!(extract_fact(doc, "species"), None);
        assert_eq!(extract_fact("", "gender"), None);
    }

    #[test]
    fn test_extract_fact_first_occurrence_wins() {
        let doc = "<aside><h3>Goal</h3><div>Chef</div><h3>Goal</h3><div>Pilot</div></aside>";
        assert_eq!(extract_fact(doc, "goal").as_deref(), Some("Chef"));
    }

    #[test]
    fn test_extract_fact_first_matching_segment_decides() {
        let doc = "<aside><h3>Skill</h3><div></div><h3>Skill</h3><div>Cooking</div></aside>";
        assert_eq!(extract_fact(doc, "skill"), None);
    }

    #[test]
    fn test_extract_image_strips_revision() {
        let doc = r#"<figure><a href="https://example/img.png/revision/latest">pic</a></figure>"#;
        assert_eq!(
            extract_image(doc).as_deref(),
            Some("https://example/img.png")
        );
    }

    #[test]
    fn test_extract_image_from_infobox() {
        assert_eq!(
            extract_image(RAYMOND).as_deref(),
            Some("https://static.wikia.nocookie.net/animalcrossing/images/Raymond_NH.png")
        );
    }

    #[test]
    fn test_extract_image_without_revision_suffix() {
        let doc = r#"<figure><a href="https://example/img.png">pic</a></figure>"#;
        assert_eq!(
            extract_image(doc).as_deref(),
            Some("https://example/img.png")
        );
    }

    #[test]
    fn test_extract_image_no_figure() {
        let doc = r#"<html><body><a href="https://example/img.png/revision/latest">x</a></body></html>"#;
        assert_eq!(extract_image(doc), None);
    }

    #[test]
    fn test_extract_image_figure_without_link() {
        let doc = r#"<figure><img src="https://example/img.png"></figure>"#;
        assert_eq!(extract_image(doc), None);
    }

    #[test]
    fn test_decode_entities() {
        assert_eq!(decode_entities("a &amp;lt; b"), "a &lt; b");
        assert_eq!(decode_entities("&quot;hi&quot;"), "\"hi\"");
    }
}
