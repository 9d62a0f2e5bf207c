//! Mode B (RSS/Atom) bindings for the media-desk sources in the default list.

use async_trait::async_trait;
use carbonwire_core::{Article, SourceConfig};

use crate::adapter::SourceAdapter;
use crate::modes::mode_b;

pub struct RssAdapter {
    pub name: &'static str,
    pub feed_url: &'static str,
}

#[async_trait]
impl SourceAdapter for RssAdapter {
    async fn collect(&self, limit: usize, cfg: &SourceConfig) -> anyhow::Result<Vec<Article>> {
        mode_b::collect_feed(self.name, self.feed_url, limit, cfg).await
    }
}

/// `(id, display name, feed URL)`.
pub const RSS_SOURCES: &[(&str, &str, &str)] = &[
    (
        "politico-energy",
        "Politico Energy & Climate",
        "https://www.politico.eu/feed/?s=carbon",
    ),
    (
        "euractiv-climate",
        "Euractiv Climate",
        "https://www.euractiv.com/sections/climate-environment/feed/",
    ),
    (
        "climate-home-news",
        "Climate Home News",
        "https://www.climatechangenews.com/feed/",
    ),
    (
        "mongabay-carbon",
        "Mongabay — Carbon",
        "https://news.mongabay.com/tag/carbon/feed/",
    ),
    (
        "desmog",
        "DeSmog",
        "https://www.desmog.com/feed/",
    ),
    (
        "reuters-sustainable-business",
        "Reuters Sustainable Business",
        "https://www.reutersagency.com/feed/?best-sectors=sustainable-business",
    ),
];
