//! Freshness window filter.

use chrono::{DateTime, Duration, Utc};

use crate::article::Article;
use crate::dates::parse_published_at;

/// Keep articles whose `published_at` falls in `(now - hours, now]`.
///
/// - `hours <= 0` is the identity transform (no filtering).
/// - An empty `published_at` is always kept (unknown date is not stale).
/// - An unparseable, non-empty `published_at` is dropped.
/// - A future-dated article (`published_at > now`) is always dropped.
pub fn filter_by_freshness(articles: Vec<Article>, hours: i64, now: DateTime<Utc>) -> Vec<Article> {
    if hours <= 0 {
        return articles;
    }
    let cutoff = now - Duration::hours(hours);
    articles
        .into_iter()
        .filter(|a| {
            if a.published_at.is_empty() {
                return true;
            }
            match parse_published_at(&a.published_at) {
                Some(dt) => dt > cutoff && dt <= now,
                None => false,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(published_at: &str) -> Article {
        let mut a = Article::new("Test Source");
        a.title = "Headline".into();
        a.url = format!("https://example.com/{published_at}");
        a.published_at = published_at.into();
        a
    }

    #[test]
    fn zero_hours_is_identity() {
        let now = Utc::now();
        let articles = vec![article(""), article("2020-01-01")];
        let filtered = filter_by_freshness(articles.clone(), 0, now);
        assert_eq!(filtered, articles);
    }

    #[test]
    fn empty_date_always_kept() {
        let now = Utc::now();
        let filtered = filter_by_freshness(vec![article("")], 24, now);
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn future_dated_is_dropped() {
        let now = Utc::now();
        let future = (now + Duration::hours(2)).to_rfc3339();
        let filtered = filter_by_freshness(vec![article(&future)], 24, now);
        assert!(filtered.is_empty());
    }

    #[test]
    fn stale_is_dropped_fresh_is_kept() {
        let now = Utc::now();
        let stale = (now - Duration::hours(40)).to_rfc3339();
        let fresh = (now - Duration::hours(1)).to_rfc3339();
        let filtered = filter_by_freshness(vec![article(&stale), article(&fresh)], 24, now);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].published_at, fresh);
    }

    #[test]
    fn unparseable_nonempty_is_dropped() {
        let now = Utc::now();
        let filtered = filter_by_freshness(vec![article("garbage")], 24, now);
        assert!(filtered.is_empty());
    }

    #[test]
    fn scenario_e_from_spec() {
        let now = Utc::now();
        let a1 = article(&(now - Duration::hours(1)).to_rfc3339());
        let a2 = article(&(now - Duration::hours(40)).to_rfc3339());
        let a3 = article("");
        let a4 = article(&(now + Duration::hours(2)).to_rfc3339());
        let filtered = filter_by_freshness(vec![a1.clone(), a2, a3.clone(), a4], 24, now);
        assert_eq!(filtered, vec![a1, a3]);
    }
}
