//! Acquisition Mode D — XML/JSON scholarly API.
//!
//! GET a query endpoint (e.g. a pre-print archive's Atom query), decode its
//! declared schema, map each entry to an `Article`. When the API enforces a
//! rate limit, the adapter sleeps the stated delay *after* its request —
//! modeled explicitly here rather than via a scheduler abstraction.

use std::time::Duration;

use carbonwire_core::article::Article;
use carbonwire_core::{normalize, SourceConfig};
use serde::Deserialize;

/// Schema for a scholarly-API Atom query response (the arXiv API shape).
#[derive(Debug, Deserialize)]
struct AtomFeed {
    #[serde(rename = "entry", default)]
    entries: Vec<AtomEntry>,
}

#[derive(Debug, Deserialize)]
struct AtomEntry {
    title: String,
    summary: String,
    #[serde(default)]
    published: String,
    #[serde(rename = "link", default)]
    links: Vec<AtomLink>,
}

#[derive(Debug, Deserialize, Default)]
struct AtomLink {
    #[serde(rename = "@href", default)]
    href: String,
    #[serde(rename = "@rel", default)]
    rel: String,
}

impl AtomEntry {
    fn abstract_url(&self) -> Option<String> {
        self.links
            .iter()
            .find(|l| l.rel == "alternate" || l.rel.is_empty())
            .map(|l| l.href.clone())
    }
}

/// Courtesy delay applied after the request, per the academic API's documented
/// rate limit (arXiv asks for ≥3s between requests).
const POST_REQUEST_DELAY: Duration = Duration::from_secs(3);

pub async fn collect_scholarly_api(
    source_name: &str,
    query_endpoint: &str,
    limit: usize,
    cfg: &SourceConfig,
) -> anyhow::Result<Vec<Article>> {
    let resp = cfg
        .client
        .get(query_endpoint)
        .header("Accept", "application/atom+xml")
        .send()
        .await
        .map_err(|e| anyhow::anyhow!("querying {query_endpoint}: {e}"))?
        .error_for_status()
        .map_err(|e| anyhow::anyhow!("querying {query_endpoint}: {e}"))?;

    let body = resp.text().await?;

    // Rate-limit courtesy sleep happens after the request completes, not before.
    tokio::time::sleep(POST_REQUEST_DELAY).await;

    let feed: AtomFeed = quick_xml::de::from_str(&body)
        .map_err(|e| anyhow::anyhow!("decoding scholarly API response from {query_endpoint}: {e}"))?;

    let articles = feed
        .entries
        .into_iter()
        .take(limit)
        .filter_map(|entry| {
            let url = entry.abstract_url()?;
            let mut a = Article::new(source_name);
            a.title = normalize::clean(&entry.title);
            a.url = url;
            a.excerpt = normalize::clean(&entry.summary);
            a.published_at = entry.published;
            a.is_valid().then_some(a)
        })
        .collect();

    Ok(articles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn decodes_atom_entries() {
        let server = crate::testing::StubServer::start().await;
        let body = r#"<?xml version="1.0" encoding="UTF-8"?>
        <feed xmlns="http://www.w3.org/2005/Atom">
          <entry>
            <title>Carbon Pricing Under Uncertainty</title>
            <summary>We study carbon pricing policy under model uncertainty.</summary>
            <published>2026-02-01T00:00:00Z</published>
            <link href="https://arxiv.example/abs/1234.5678" rel="alternate"/>
          </entry>
        </feed>"#;
        server.serve_xml("/query", body).await;

        let cfg = SourceConfig::new().unwrap();
        let endpoint = format!("{}/query", server.base_url());
        let articles = collect_scholarly_api("arXiv econ.GN", &endpoint, 10, &cfg)
            .await
            .unwrap();

        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Carbon Pricing Under Uncertainty");
        assert_eq!(articles[0].url, "https://arxiv.example/abs/1234.5678");
    }
}
