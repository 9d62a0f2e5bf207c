//! Post-collection URL deduplication.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::article::Article;

static UTM_QUERY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]utm_[^=]*=[^&]*").expect("valid regex"));

/// Normalize a URL for dedup comparison by stripping `utm_*` query params.
/// Any other query string is compared verbatim.
fn normalize_for_dedup(url: &str) -> String {
    let stripped = UTM_QUERY.replace_all(url, "");
    // Collapse a dangling `?` or `&` left behind by the strip.
    let stripped = stripped.trim_end_matches('?').trim_end_matches('&');
    stripped.replace("?&", "?")
}

/// Keep the first occurrence of each (normalized) URL; drop the rest.
/// Preserves input order — "first occurrence" means first in invocation order,
/// which for the dispatcher is source-registration order.
pub fn dedup_by_url(articles: Vec<Article>) -> Vec<Article> {
    let mut seen = HashSet::new();
    articles
        .into_iter()
        .filter(|a| seen.insert(normalize_for_dedup(&a.url)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(source: &str, url: &str) -> Article {
        let mut a = Article::new(source);
        a.title = "Headline".into();
        a.url = url.into();
        a
    }

    #[test]
    fn keeps_first_occurrence() {
        let articles = vec![
            article("First Source", "https://example.com/a"),
            article("Second Source", "https://example.com/a"),
        ];
        let deduped = dedup_by_url(articles);
        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped[0].source, "First Source");
    }

    #[test]
    fn strips_utm_params_before_comparing() {
        let articles = vec![
            article("A", "https://example.com/a?utm_source=newsletter"),
            article("B", "https://example.com/a"),
        ];
        let deduped = dedup_by_url(articles);
        assert_eq!(deduped.len(), 1);
    }

    #[test]
    fn distinct_urls_survive() {
        let articles = vec![
            article("A", "https://example.com/a"),
            article("B", "https://example.com/b"),
        ];
        assert_eq!(dedup_by_url(articles).len(), 2);
    }
}
