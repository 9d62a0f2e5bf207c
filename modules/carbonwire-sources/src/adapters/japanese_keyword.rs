//! Japanese general-news sources: carbon-market coverage is a small fraction
//! of total output, so these wrap a plain Mode A/C collector with the shared
//! vocabulary filter instead of getting a bespoke source.

use async_trait::async_trait;
use carbonwire_core::{Article, SourceConfig};

use crate::adapter::SourceAdapter;
use crate::keywords::matches_vocabulary;
use crate::modes::mode_a;

/// Wraps any WordPress-REST-shaped endpoint and drops entries that don't
/// mention the carbon vocabulary.
pub struct KeywordFilteredWordPressAdapter {
    pub name: &'static str,
    pub endpoint: &'static str,
}

#[async_trait]
impl SourceAdapter for KeywordFilteredWordPressAdapter {
    async fn collect(&self, limit: usize, cfg: &SourceConfig) -> anyhow::Result<Vec<Article>> {
        let candidates = mode_a::collect_json_index(self.name, self.endpoint, limit * 5, cfg).await?;
        Ok(candidates
            .into_iter()
            .filter(|a| matches_vocabulary([a.title.as_str(), a.excerpt.as_str()]))
            .take(limit)
            .collect())
    }
}

/// `(id, display name, wp-json posts endpoint)`.
pub const JAPANESE_KEYWORD_SOURCES: &[(&str, &str, &str)] = &[
    (
        "nikkei-keyword",
        "Nikkei",
        "https://www.nikkei.com/wp-json/wp/v2/posts",
    ),
    (
        "asahi-keyword",
        "Asahi Shimbun",
        "https://www.asahi.com/wp-json/wp/v2/posts",
    ),
    (
        "yomiuri-keyword",
        "Yomiuri Shimbun",
        "https://www.yomiuri.co.jp/wp-json/wp/v2/posts",
    ),
    (
        "mainichi-keyword",
        "Mainichi Shimbun",
        "https://mainichi.jp/wp-json/wp/v2/posts",
    ),
];
