//! Mode E (embedded-JSON scrape) binding for the one source whose listing
//! page carries its article index as a hex/backslash-escaped JSON string
//! inside an inline script rather than in the document markup.

use std::sync::LazyLock;

use async_trait::async_trait;
use carbonwire_core::{Article, SourceConfig};
use regex::Regex;

use crate::adapter::SourceAdapter;
use crate::modes::mode_e::collect_embedded_json;

static NEDO_BLOB_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"window\.__NEDO_NEWS__\s*=\s*"(.*?)";"#).expect("valid regex"));

pub struct NedoEmbeddedAdapter {
    pub name: &'static str,
    pub listing_url: &'static str,
}

pub const NEDO_SOURCE: (&str, &str) = (
    "nedo-embedded",
    "https://www.nedo.go.jp/news/press/index.html",
);

#[async_trait]
impl SourceAdapter for NedoEmbeddedAdapter {
    async fn collect(&self, limit: usize, cfg: &SourceConfig) -> anyhow::Result<Vec<Article>> {
        collect_embedded_json(self.name, self.listing_url, &NEDO_BLOB_PATTERN, limit, cfg).await
    }
}
