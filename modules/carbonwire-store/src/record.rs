//! Record shapes the writer persists and the mailer reads back. Distinct from [`carbonwire_core::Article`]: these additionally
//! carry the store-side properties (tag palette entry, score, summary,
//! short-headline) that only exist once a page has been written.

use chrono::{DateTime, Utc};
use carbonwire_core::Article;

/// Two tag values the writer's "type" select property is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Headline,
    Related,
}

impl RecordKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Headline => "headline",
            RecordKind::Related => "related",
        }
    }
}

/// What the writer sends to the store for one article.
#[derive(Debug, Clone)]
pub struct PersistableArticle {
    pub title: String,
    pub url: String,
    pub source: String,
    pub kind: RecordKind,
    pub score: Option<f64>,
    pub published_at: Option<DateTime<Utc>>,
    /// First 2000 characters of the body, stored as the "AI Summary" rich-text property.
    pub ai_summary: String,
    pub body: String,
}

/// Current cap on the "AI Summary" property.
pub const AI_SUMMARY_CHARS: usize = 2000;

impl PersistableArticle {
    pub fn from_article(article: &Article, kind: RecordKind) -> Self {
        let ai_summary: String = article.excerpt.chars().take(AI_SUMMARY_CHARS).collect();
        Self {
            title: article.title.clone(),
            url: article.url.clone(),
            source: article.source.clone(),
            kind,
            score: None,
            published_at: carbonwire_core::dates::parse_published_at(&article.published_at),
            ai_summary,
            body: article.excerpt.clone(),
        }
    }
}

/// What the mailer reads back from the store.
#[derive(Debug, Clone)]
pub struct PersistedArticle {
    pub title: String,
    pub url: String,
    pub source: String,
    pub ai_summary: String,
    /// A ≤50-code-point summary produced by an external summarizer; `None`
    /// when the store's sentinel value (`-`, `−`, or `—`) is present.
    pub short_headline: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}
