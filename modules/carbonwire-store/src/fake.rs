//! In-memory [`DocumentStore`] fake for tests, grounded on the
//! same `test-support` feature-gated fake pattern as
//! `carbonwire_sources::testing::StubServer`.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::record::{PersistableArticle, PersistedArticle};
use crate::store::DocumentStore;

#[derive(Default)]
pub struct FakeStore {
    pages: Mutex<Vec<PersistableArticle>>,
    pub fail_next_insert: std::sync::atomic::AtomicBool,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inserted(&self) -> Vec<PersistableArticle> {
        self.pages.lock().expect("lock poisoned").clone()
    }
}

#[async_trait]
impl DocumentStore for FakeStore {
    async fn create_collection(&self, _name: &str) -> Result<String> {
        Ok("fake-collection-id".to_string())
    }

    async fn insert_article(&self, _collection_id: &str, article: &PersistableArticle) -> Result<()> {
        if self.fail_next_insert.swap(false, std::sync::atomic::Ordering::SeqCst) {
            return Err(crate::error::StoreError::WriteFailed {
                title: article.title.clone(),
                message: "simulated failure".into(),
            });
        }
        self.pages.lock().expect("lock poisoned").push(article.clone());
        Ok(())
    }

    async fn query_recent(&self, _collection_id: &str, since: DateTime<Utc>) -> Result<Vec<PersistedArticle>> {
        Ok(self
            .pages
            .lock()
            .expect("lock poisoned")
            .iter()
            .filter(|a| a.published_at.map(|p| p >= since).unwrap_or(false))
            .map(|a| PersistedArticle {
                title: a.title.clone(),
                url: a.url.clone(),
                source: a.source.clone(),
                ai_summary: a.ai_summary.clone(),
                short_headline: None,
                published_at: a.published_at,
            })
            .collect())
    }
}
