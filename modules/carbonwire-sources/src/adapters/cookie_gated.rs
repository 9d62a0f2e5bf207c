//! One source hands out an essential session cookie on the listing page and
//! 403s the article fetch without it — the dispatcher's plain pooled client
//! never carries cookies across requests, so this adapter asks
//! for a dedicated cookie-jar client instead.

use async_trait::async_trait;
use carbonwire_core::{normalize, Article, SourceConfig};

use crate::adapter::SourceAdapter;
use crate::content::{extract_body_text, DEFAULT_CONTENT_SELECTORS};
use crate::modes::mode_c::find_entries_for_cookie_gated;

pub struct CookieGatedAdapter {
    pub name: &'static str,
    pub listing_url: &'static str,
}

pub const FT_CLIMATE_SOURCE: (&str, &str, &str) = (
    "ft-climate-cookie",
    "Financial Times — Climate Capital",
    "https://www.ft.com/climate-capital",
);

#[async_trait]
impl SourceAdapter for CookieGatedAdapter {
    async fn collect(&self, limit: usize, cfg: &SourceConfig) -> anyhow::Result<Vec<Article>> {
        let jar_client = cfg.cookie_jar_client()?;

        let listing_html = jar_client
            .get(self.listing_url)
            .header("Accept", "text/html")
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("fetching listing {}: {e}", self.listing_url))?
            .text()
            .await?;

        let entries = find_entries_for_cookie_gated(&listing_html, self.listing_url, limit);

        let mut articles = Vec::new();
        for (title, url) in entries {
            // Reuses `jar_client` so the session cookie set by the listing
            // request above is sent on the article fetch too.
            let Ok(resp) = jar_client.get(&url).send().await else { continue };
            let Ok(html) = resp.text().await else { continue };
            let mut a = Article::new(self.name);
            a.title = normalize::clean(&title);
            a.url = url;
            a.excerpt = extract_body_text(&html, DEFAULT_CONTENT_SELECTORS);
            if a.is_valid() {
                articles.push(a);
            }
        }
        Ok(articles)
    }
}
