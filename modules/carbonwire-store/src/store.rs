//! The document-store writer contract and its one production
//! implementation: a hierarchical page/property store reachable over HTTP
//! (bearer-token auth, one page per article, typed properties, body as
//! capped text blocks).
//!
//! Kept as a trait so the mailer and the collector job depend on the
//! contract, not on a specific backing store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::warn;

use crate::blocks::split_into_blocks;
use crate::error::{Result, StoreError};
use crate::record::{PersistableArticle, PersistedArticle};

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Create (or, given an existing id, simply validate/reuse) the
    /// collection articles are written into. Called at most once per run,
    /// normally through [`crate::collection_id::ensure`].
    async fn create_collection(&self, name: &str) -> Result<String>;

    /// Persist one article as a page. Failures here are per-article —
    /// callers log and continue rather than aborting a batch.
    async fn insert_article(&self, collection_id: &str, article: &PersistableArticle) -> Result<()>;

    /// Pages with a published-date property within `[since, now]`, for the mailer.
    async fn query_recent(&self, collection_id: &str, since: DateTime<Utc>) -> Result<Vec<PersistedArticle>>;
}

/// HTTP-backed implementation against a hierarchical page/property store.
/// Talks a Notion-shaped API: pages carry typed properties, bodies are block
/// children, tags are a fixed-palette select property.
pub struct HttpDocumentStore {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl HttpDocumentStore {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.is_empty() {
            return Err(StoreError::ClientInit("document-store token is empty".into()));
        }
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| StoreError::ClientInit(e.to_string()))?;
        Ok(Self { client, base_url: base_url.into(), token })
    }

    fn auth_header(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

#[async_trait]
impl DocumentStore for HttpDocumentStore {
    async fn create_collection(&self, name: &str) -> Result<String> {
        let resp = self
            .client
            .post(format!("{}/v1/collections", self.base_url))
            .header("Authorization", self.auth_header())
            .json(&serde_json::json!({ "name": name }))
            .send()
            .await
            .map_err(|e| StoreError::Other(anyhow::anyhow!("creating collection: {e}")))?
            .error_for_status()
            .map_err(|e| StoreError::Other(anyhow::anyhow!("creating collection: {e}")))?;

        let body: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| StoreError::Other(anyhow::anyhow!("decoding collection response: {e}")))?;

        body.get("id")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or_else(|| StoreError::Other(anyhow::anyhow!("collection response missing id")))
    }

    async fn insert_article(&self, collection_id: &str, article: &PersistableArticle) -> Result<()> {
        let blocks = split_into_blocks(&article.body);
        let payload = serde_json::json!({
            "collection_id": collection_id,
            "properties": {
                "title": article.title,
                "url": article.url,
                "source": { "select": article.source },
                "type": { "select": article.kind.as_str() },
                "score": article.score,
                "published_at": article.published_at,
                "ai_summary": article.ai_summary,
            },
            "blocks": blocks,
        });

        let result = self
            .client
            .post(format!("{}/v1/pages", self.base_url))
            .header("Authorization", self.auth_header())
            .json(&payload)
            .send()
            .await
            .and_then(|r| r.error_for_status());

        if let Err(e) = result {
            warn!(title = %article.title, error = %e, "failed to write article to document store");
            return Err(StoreError::WriteFailed { title: article.title.clone(), message: e.to_string() });
        }
        Ok(())
    }

    async fn query_recent(&self, collection_id: &str, since: DateTime<Utc>) -> Result<Vec<PersistedArticle>> {
        let resp = self
            .client
            .get(format!("{}/v1/collections/{}/pages", self.base_url, collection_id))
            .header("Authorization", self.auth_header())
            .query(&[("since", since.to_rfc3339())])
            .send()
            .await
            .map_err(|e| StoreError::QueryFailed(e.to_string()))?
            .error_for_status()
            .map_err(|e| StoreError::QueryFailed(e.to_string()))?;

        let rows: Vec<RawPage> = resp
            .json()
            .await
            .map_err(|e| StoreError::QueryFailed(format!("decoding pages response: {e}")))?;

        Ok(rows.into_iter().map(RawPage::into_persisted).collect())
    }
}

#[derive(serde::Deserialize)]
struct RawPage {
    title: String,
    url: String,
    source: String,
    ai_summary: String,
    #[serde(default)]
    short_headline: Option<String>,
    #[serde(default)]
    published_at: Option<DateTime<Utc>>,
}

/// Sentinel short-headline values meaning "the summarizer produced nothing".
/// Owned opaquely by the upstream summarizer; the core only needs to
/// recognize them.
const NO_SUMMARY_SENTINELS: &[&str] = &["-", "−", "—"];

impl RawPage {
    fn into_persisted(self) -> PersistedArticle {
        let short_headline = self
            .short_headline
            .filter(|s| !NO_SUMMARY_SENTINELS.contains(&s.as_str()));
        PersistedArticle {
            title: self.title,
            url: self.url,
            source: self.source,
            ai_summary: self.ai_summary,
            short_headline,
            published_at: self.published_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_token_fails_client_construction() {
        let err = HttpDocumentStore::new("https://store.example", "").unwrap_err();
        assert!(matches!(err, StoreError::ClientInit(_)));
    }

    #[test]
    fn sentinel_short_headline_becomes_none() {
        let page = RawPage {
            title: "T".into(),
            url: "https://example.com/a".into(),
            source: "Source".into(),
            ai_summary: "summary".into(),
            short_headline: Some("—".into()),
            published_at: None,
        };
        assert!(page.into_persisted().short_headline.is_none());
    }

    #[test]
    fn real_short_headline_is_kept() {
        let page = RawPage {
            title: "T".into(),
            url: "https://example.com/a".into(),
            source: "Source".into(),
            ai_summary: "summary".into(),
            short_headline: Some("EU raises CBAM threshold".into()),
            published_at: None,
        };
        assert_eq!(page.into_persisted().short_headline.unwrap(), "EU raises CBAM threshold");
    }
}
