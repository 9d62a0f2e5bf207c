//! Acquisition Mode A — JSON index endpoint.
//!
//! GET a URL returning an array of post objects with an HTML-escaped title,
//! a permalink, a GMT date, and rendered-HTML content (the WordPress REST
//! `/wp-json/wp/v2/posts` shape, also used verbatim or near-verbatim by a
//! number of other CMS-backed news sites in the default source list).

use carbonwire_core::{normalize, SourceConfig};
use carbonwire_core::article::Article;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct WpRendered {
    rendered: String,
}

#[derive(Debug, Deserialize)]
struct WpPost {
    link: String,
    date_gmt: String,
    title: WpRendered,
    content: WpRendered,
}

/// Fetch a WordPress-REST-shaped JSON index and map each post to an `Article`.
pub async fn collect_json_index(
    source_name: &str,
    endpoint: &str,
    limit: usize,
    cfg: &SourceConfig,
) -> anyhow::Result<Vec<Article>> {
    let resp = cfg
        .client
        .get(endpoint)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| anyhow::anyhow!("fetching {endpoint}: {e}"))?
        .error_for_status()
        .map_err(|e| anyhow::anyhow!("fetching {endpoint}: {e}"))?;

    let body = resp.text().await?;
    if carbonwire_core::http::is_bot_challenge(&body) {
        anyhow::bail!("bot challenge detected fetching {endpoint}");
    }

    let posts: Vec<WpPost> = serde_json::from_str(&body)
        .map_err(|e| anyhow::anyhow!("decoding JSON index from {endpoint}: {e}"))?;

    let articles = posts
        .into_iter()
        .take(limit)
        .map(|post| {
            let mut a = Article::new(source_name);
            a.title = normalize::clean(&post.title.rendered);
            a.url = post.link;
            a.excerpt = normalize::clean(&post.content.rendered);
            a.published_at = gmt_to_rfc3339(&post.date_gmt);
            a
        })
        .filter(|a| a.is_valid())
        .collect();

    Ok(articles)
}

/// WordPress's `date_gmt` is a naive `YYYY-MM-DDTHH:MM:SS`; the article
/// contract wants RFC-3339, so stamp it as UTC explicitly.
fn gmt_to_rfc3339(date_gmt: &str) -> String {
    if date_gmt.is_empty() {
        return String::new();
    }
    format!("{date_gmt}Z")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn maps_posts_and_respects_limit() {
        let server = crate::testing::StubServer::start().await;
        let body = serde_json::json!([
            {
                "link": format!("{}/post/1", server.base_url()),
                "date_gmt": "2026-01-05T14:42:50",
                "title": {"rendered": "First &amp; Best"},
                "content": {"rendered": "<p>Body one</p>"},
            },
            {
                "link": format!("{}/post/2", server.base_url()),
                "date_gmt": "2026-01-04T09:00:00",
                "title": {"rendered": "Second"},
                "content": {"rendered": "<p>Body two</p>"},
            },
            {
                "link": format!("{}/post/3", server.base_url()),
                "date_gmt": "2026-01-03T12:00:00",
                "title": {"rendered": "Third"},
                "content": {"rendered": "<p>Body three</p>"},
            },
        ]);
        server.serve_json("/wp-json/wp/v2/posts", body).await;

        let cfg = SourceConfig::new().unwrap();
        let endpoint = format!("{}/wp-json/wp/v2/posts", server.base_url());
        let articles = collect_json_index("Carbon Herald", &endpoint, 2, &cfg)
            .await
            .unwrap();

        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].published_at, "2026-01-05T14:42:50Z");
        assert_eq!(articles[0].title, "First & Best");
        assert!(!articles[0].excerpt.is_empty());
        assert!(articles.iter().all(|a| a.source == "Carbon Herald"));
    }
}
