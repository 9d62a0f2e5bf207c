//! The canonical article record produced by every source adapter.

use serde::{Deserialize, Serialize};

use crate::dates::parse_published_at;

/// One normalized article, as produced by a [`crate::http::SourceConfig`]-driven
/// adapter and consumed by the dispatcher, then the store/mailer sinks.
///
/// Invariants (enforced by [`Article::is_valid`], not by construction —
/// adapters build these with plain struct literals):
/// - `url` is the dedup key and must be non-empty and absolute.
/// - `title` must be non-empty.
/// - `published_at`, when non-empty, must parse via [`crate::dates::parse_published_at`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Article {
    /// Stable human label for the adapter that produced this record, e.g. "Carbon Brief".
    pub source: String,
    pub title: String,
    pub url: String,
    /// RFC-3339 timestamp, or empty if the date is unknown.
    #[serde(default)]
    pub published_at: String,
    /// Full article body, not just a teaser. Routinely 2k-15k characters.
    #[serde(default)]
    pub excerpt: String,
    pub is_headline: bool,
}

impl Article {
    /// A record with `source` and `is_headline = true` and everything else empty,
    /// useful as a starting point for adapters that fill in fields incrementally.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            title: String::new(),
            url: String::new(),
            published_at: String::new(),
            excerpt: String::new(),
            is_headline: true,
        }
    }

    /// Title and URL must be non-empty; an empty `source` is also rejected since
    /// it breaks the stable-per-adapter-label contract adapters must uphold.
    /// `published_at`, if present, must parse under one of the three supported formats.
    pub fn is_valid(&self) -> bool {
        if self.source.is_empty() || self.title.is_empty() || self.url.is_empty() {
            return false;
        }
        if !self.published_at.is_empty() && parse_published_at(&self.published_at).is_none() {
            return false;
        }
        true
    }
}

/// `(articles, errors)` as returned by the dispatcher (§4.6) and by each
/// individual adapter invocation before aggregation.
#[derive(Debug, Default, Clone)]
pub struct CollectionResult {
    pub articles: Vec<Article>,
    pub errors: Vec<String>,
}

impl CollectionResult {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_title_or_url() {
        let mut a = Article::new("Test Source");
        a.url = "https://example.com/x".into();
        assert!(!a.is_valid(), "empty title must be invalid");

        let mut b = Article::new("Test Source");
        b.title = "Headline".into();
        assert!(!b.is_valid(), "empty url must be invalid");
    }

    #[test]
    fn accepts_empty_published_at() {
        let mut a = Article::new("Test Source");
        a.title = "Headline".into();
        a.url = "https://example.com/x".into();
        assert!(a.is_valid());
    }

    #[test]
    fn rejects_unparseable_published_at() {
        let mut a = Article::new("Test Source");
        a.title = "Headline".into();
        a.url = "https://example.com/x".into();
        a.published_at = "not-a-date".into();
        assert!(!a.is_valid());
    }
}
