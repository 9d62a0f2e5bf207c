//! Mode A (WordPress-REST JSON index) bindings: a data table of
//! `(id, display name, endpoint)` rows, one thin adapter struct wrapping
//! [`crate::modes::mode_a::collect_json_index`].

use async_trait::async_trait;
use carbonwire_core::{Article, SourceConfig};

use crate::adapter::SourceAdapter;
use crate::modes::mode_a;

pub struct WordPressAdapter {
    pub name: &'static str,
    pub endpoint: &'static str,
}

#[async_trait]
impl SourceAdapter for WordPressAdapter {
    async fn collect(&self, limit: usize, cfg: &SourceConfig) -> anyhow::Result<Vec<Article>> {
        mode_a::collect_json_index(self.name, self.endpoint, limit, cfg).await
    }
}

/// `(id, display name, wp-json posts endpoint)`.
pub const WORDPRESS_SOURCES: &[(&str, &str, &str)] = &[
    (
        "carbon-herald",
        "Carbon Herald",
        "https://carbonherald.com/wp-json/wp/v2/posts",
    ),
    (
        "carbon-pulse",
        "Carbon Pulse",
        "https://carbon-pulse.com/wp-json/wp/v2/posts",
    ),
    (
        "quantum-commodity-intelligence",
        "Quantum Commodity Intelligence",
        "https://qcintel.com/wp-json/wp/v2/posts",
    ),
    (
        "energy-monitor",
        "Energy Monitor",
        "https://www.energymonitor.ai/wp-json/wp/v2/posts",
    ),
    (
        "edie",
        "edie",
        "https://www.edie.net/wp-json/wp/v2/posts",
    ),
    (
        "current-climate-news",
        "Current Climate News",
        "https://currentclimate.news/wp-json/wp/v2/posts",
    ),
    (
        "carbon-markets-daily",
        "Carbon Markets Daily",
        "https://carbonmarketsdaily.com/wp-json/wp/v2/posts",
    ),
    (
        "greentech-media-carbon",
        "Greentech Media — Carbon",
        "https://www.greentechmedia.com/wp-json/wp/v2/posts",
    ),
];
