//! Acquisition Mode B — RSS/Atom feed.
//!
//! Parsed via `feed-rs`. Title is taken verbatim. Excerpt preference order:
//! `content:encoded` → `description` → fetched-from-article-page text.

use carbonwire_core::article::Article;
use carbonwire_core::{normalize, SourceConfig};

use crate::content::{extract_body_text, DEFAULT_CONTENT_SELECTORS};

/// Fetch and parse an RSS/Atom feed, following through to the article page
/// for any entry whose feed content is empty.
pub async fn collect_feed(
    source_name: &str,
    feed_url: &str,
    limit: usize,
    cfg: &SourceConfig,
) -> anyhow::Result<Vec<Article>> {
    let bytes = cfg
        .client
        .get(feed_url)
        .header("Accept", "application/rss+xml, application/atom+xml, text/xml")
        .send()
        .await
        .map_err(|e| anyhow::anyhow!("fetching feed {feed_url}: {e}"))?
        .error_for_status()
        .map_err(|e| anyhow::anyhow!("fetching feed {feed_url}: {e}"))?
        .bytes()
        .await?;

    let feed = feed_rs::parser::parse(&bytes[..])
        .map_err(|e| anyhow::anyhow!("parsing feed {feed_url}: {e}"))?;

    let mut articles = Vec::new();
    for entry in feed.entries.into_iter().take(limit) {
        let Some(url) = entry.links.first().map(|l| l.href.clone()) else {
            continue;
        };
        let title = entry
            .title
            .map(|t| t.content)
            .unwrap_or_default();

        let published_at = entry
            .published
            .or(entry.updated)
            .map(|dt| carbonwire_core::dates::to_rfc3339(dt))
            .unwrap_or_default();

        let mut excerpt = entry
            .content
            .and_then(|c| c.body)
            .map(|body| normalize::clean(&body))
            .filter(|s| !s.is_empty());

        if excerpt.is_none() {
            excerpt = entry
                .summary
                .map(|s| normalize::clean(&s.content))
                .filter(|s| !s.is_empty());
        }

        if excerpt.is_none() {
            excerpt = follow_through(&url, cfg).await.filter(|s| !s.is_empty());
        }

        let mut a = Article::new(source_name);
        a.title = normalize::clean(&title);
        a.url = url;
        a.published_at = published_at;
        a.excerpt = excerpt.unwrap_or_default();
        if a.is_valid() {
            articles.push(a);
        }
    }

    Ok(articles)
}

/// Follow-through fetch: a second request to the article
/// page when the feed itself didn't carry enough body text.
async fn follow_through(url: &str, cfg: &SourceConfig) -> Option<String> {
    let html = cfg.client.get(url).send().await.ok()?.text().await.ok()?;
    let text = extract_body_text(&html, DEFAULT_CONTENT_SELECTORS);
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn follows_through_when_feed_has_no_description() {
        let server = crate::testing::StubServer::start().await;
        let article_url = format!("{}/news/detail", server.base_url());

        let article_html = format!(
            r#"<html><body><div class="c-news-detail__content"><p>{}</p></div></body></html>"#,
            "Real scraped article body. ".repeat(20)
        );
        server.serve_html("/news/detail", article_html).await;

        let feed_xml = format!(
            r#"<?xml version="1.0"?>
            <rss version="2.0"><channel>
                <item>
                    <title>Breaking Carbon Story</title>
                    <link>{article_url}</link>
                    <pubDate>Mon, 05 Jan 2026 14:42:50 GMT</pubDate>
                </item>
            </channel></rss>"#
        );
        server.serve_xml("/feed.xml", feed_xml).await;
        let feed_url = format!("{}/feed.xml", server.base_url());

        let cfg = SourceConfig::new().unwrap();
        let articles = collect_feed("Test Feed", &feed_url, 10, &cfg).await.unwrap();
        assert_eq!(articles.len(), 1);
        assert!(articles[0].excerpt.len() >= 500, "excerpt len = {}", articles[0].excerpt.len());
        assert!(articles[0].excerpt.contains("Real scraped article body"));
    }
}
