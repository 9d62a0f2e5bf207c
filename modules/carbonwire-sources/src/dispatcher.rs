//! Fan out a requested source list to the registry and aggregate the
//! results. Responsible for: resolving identifiers against a
//! [`Registry`], isolating one source's panic from the rest, recording a
//! per-source error without aborting the run, logging one consolidated
//! warning, and deduplicating by URL. Freshness filtering is the caller's
//! job — this function has no opinion on article age.

use carbonwire_core::{dedup::dedup_by_url, Article, CollectionResult, SourceConfig};
use tracing::warn;

use crate::registry::Registry;

/// Collect from every id in `sources`, each capped at `per_source_limit`
/// articles, against `registry`. Every source is invoked as its own
/// `tokio::spawn` task: a panicking adapter surfaces as a `JoinError` here
/// rather than taking down the others, the same isolation `catch_unwind`
/// would give but composable across the adapter's own `.await` points.
pub async fn collect_from_sources(
    sources: &[String],
    per_source_limit: usize,
    cfg: &SourceConfig,
    registry: &Registry,
) -> CollectionResult {
    let mut result = CollectionResult::new();
    let mut tasks = Vec::with_capacity(sources.len());

    for id in sources {
        match registry.get(id) {
            None => {
                result.errors.push(format!("unknown source: {id}"));
            }
            Some(entry) => {
                let adapter = entry.adapter.clone();
                let cfg = cfg.clone();
                let limit = per_source_limit;
                tasks.push((id.clone(), tokio::spawn(async move { adapter.collect(limit, &cfg).await })));
            }
        }
    }

    for (id, task) in tasks {
        match task.await {
            Ok(Ok(articles)) => result.articles.extend(articles),
            Ok(Err(e)) => result.errors.push(format!("collecting {id}: {e}")),
            Err(join_err) => result.errors.push(format!("collecting {id}: panicked ({join_err})")),
        }
    }

    if !result.errors.is_empty() {
        warn!(
            failed = result.errors.len(),
            requested = sources.len(),
            "one or more sources failed to collect this run"
        );
    }

    result.articles = dedup_by_url(std::mem::take(&mut result.articles));
    result
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use std::sync::Arc;

    use crate::adapter::{Category, SourceAdapter};
    use crate::registry::{Registry, RegistryEntry};

    use super::*;

    struct FixedAdapter {
        articles: Vec<Article>,
    }

    #[async_trait]
    impl SourceAdapter for FixedAdapter {
        async fn collect(&self, limit: usize, _cfg: &SourceConfig) -> anyhow::Result<Vec<Article>> {
            Ok(self.articles.iter().take(limit).cloned().collect())
        }
    }

    struct PanickingAdapter;

    #[async_trait]
    impl SourceAdapter for PanickingAdapter {
        async fn collect(&self, _limit: usize, _cfg: &SourceConfig) -> anyhow::Result<Vec<Article>> {
            panic!("simulated adapter bug");
        }
    }

    fn article(source: &str, url: &str) -> Article {
        let mut a = Article::new(source);
        a.title = "Headline".into();
        a.url = url.into();
        a
    }

    fn test_registry() -> Registry {
        let mut reg = Registry::empty();
        reg.insert(RegistryEntry {
            id: "carbon-brief",
            name: "Carbon Brief",
            category: Category::Media,
            adapter: Arc::new(FixedAdapter {
                articles: vec![
                    article("Carbon Brief", "https://carbonbrief.example/a"),
                    article("Carbon Brief", "https://carbonbrief.example/b"),
                ],
            }),
        });
        reg.insert(RegistryEntry {
            id: "flaky-source",
            name: "Flaky Source",
            category: Category::Media,
            adapter: Arc::new(PanickingAdapter),
        });
        reg
    }

    #[tokio::test]
    async fn unknown_source_is_recorded_not_fatal() {
        let cfg = SourceConfig::new().unwrap();
        let registry = test_registry();
        let sources = vec!["does-not-exist".to_string(), "carbon-brief".to_string()];

        let result = collect_from_sources(&sources, 10, &cfg, &registry).await;

        assert_eq!(result.articles.len(), 2);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("does-not-exist"));
        assert!(result.errors[0].starts_with("unknown source:"));
    }

    #[tokio::test]
    async fn panicking_source_is_isolated() {
        let cfg = SourceConfig::new().unwrap();
        let registry = test_registry();
        let sources = vec!["flaky-source".to_string(), "carbon-brief".to_string()];

        let result = collect_from_sources(&sources, 10, &cfg, &registry).await;

        assert_eq!(result.articles.len(), 2, "the healthy source's articles must still come through");
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("flaky-source"));
    }

    #[tokio::test]
    async fn deduplicates_across_sources() {
        let mut reg = Registry::empty();
        reg.insert(RegistryEntry {
            id: "source-a",
            name: "Source A",
            category: Category::Media,
            adapter: Arc::new(FixedAdapter { articles: vec![article("Source A", "https://example.com/shared")] }),
        });
        reg.insert(RegistryEntry {
            id: "source-b",
            name: "Source B",
            category: Category::Media,
            adapter: Arc::new(FixedAdapter { articles: vec![article("Source B", "https://example.com/shared")] }),
        });

        let cfg = SourceConfig::new().unwrap();
        let sources = vec!["source-a".to_string(), "source-b".to_string()];
        let result = collect_from_sources(&sources, 10, &cfg, &reg).await;

        assert_eq!(result.articles.len(), 1);
        assert_eq!(result.articles[0].source, "Source A", "first invocation order wins the dedup");
    }
}
