//! Acquisition Mode C — HTML listing page with follow-through to article
//! bodies. Used by most of the government/regulator portals
//! in the default source list, which publish no feed or JSON API.

use std::collections::HashSet;

use carbonwire_core::article::Article;
use carbonwire_core::{normalize, SourceConfig};
use scraper::{Html, Selector};
use url::Url;

use crate::content::extract_body_text;

/// Static description of one HTML-listing source. The `title_selectors` list
/// is tried in priority order against the *whole listing page*; the first
/// selector that matches at least one element wins and its matches become
/// the page's entries.
#[derive(Clone, Copy)]
pub struct HtmlListingSpec {
    pub source_name: &'static str,
    pub listing_url: &'static str,
    pub title_selectors: &'static [&'static str],
    pub content_selectors: &'static [&'static str],
}

pub async fn collect_html_listing(
    spec: &HtmlListingSpec,
    limit: usize,
    cfg: &SourceConfig,
) -> anyhow::Result<Vec<Article>> {
    let listing_html = cfg
        .client
        .get(spec.listing_url)
        .header("Accept", "text/html")
        .send()
        .await
        .map_err(|e| anyhow::anyhow!("fetching listing {}: {e}", spec.listing_url))?
        .error_for_status()
        .map_err(|e| anyhow::anyhow!("fetching listing {}: {e}", spec.listing_url))?
        .text()
        .await?;

    if carbonwire_core::http::is_bot_challenge(&listing_html) {
        anyhow::bail!("bot challenge detected fetching listing {}", spec.listing_url);
    }

    let base = Url::parse(spec.listing_url)
        .map_err(|e| anyhow::anyhow!("invalid listing URL {}: {e}", spec.listing_url))?;
    let entries = find_entries(&listing_html, &base, spec.title_selectors, limit);

    let mut articles = Vec::new();
    for (title, url) in entries {
        let excerpt = fetch_body(&url, spec.content_selectors, cfg).await.unwrap_or_default();
        let mut a = Article::new(spec.source_name);
        a.title = title;
        a.url = url;
        a.excerpt = excerpt;
        if a.is_valid() {
            articles.push(a);
        }
    }
    Ok(articles)
}

fn find_entries(
    listing_html: &str,
    base: &Url,
    title_selectors: &[&str],
    limit: usize,
) -> Vec<(String, String)> {
    let document = Html::parse_document(listing_html);
    let mut seen: HashSet<String> = HashSet::new();
    let mut entries = Vec::new();

    for raw_selector in title_selectors {
        let Ok(selector) = Selector::parse(raw_selector) else {
            continue;
        };
        let matched: Vec<_> = document.select(&selector).collect();
        if matched.is_empty() {
            continue;
        }

        let anchor_selector = Selector::parse("a[href]").expect("valid selector");
        for element in matched {
            let title = normalize::clean(&element.html());
            if title.is_empty() {
                continue;
            }
            let href = element
                .value()
                .attr("href")
                .map(str::to_string)
                .or_else(|| element.select(&anchor_selector).next()?.value().attr("href").map(str::to_string));
            let Some(href) = href else { continue };
            let Ok(absolute) = base.join(&href) else { continue };
            let url = absolute.to_string();
            if !seen.insert(url.clone()) {
                continue;
            }
            entries.push((title, url));
            if entries.len() >= limit {
                return entries;
            }
        }
        // First selector that produced any matches wins; don't fall through
        // to a lower-priority selector once we have a working layout.
        break;
    }
    entries
}

/// Entry-extraction only, for adapters that need a non-pooled client to fetch
/// the article bodies themselves (e.g. a cookie-jar client carrying session
/// state from the listing request). Uses the same generic title-selector
/// strategy as [`collect_html_listing`] with a conservative default list.
pub fn find_entries_for_cookie_gated(listing_html: &str, listing_url: &str, limit: usize) -> Vec<(String, String)> {
    let Ok(base) = Url::parse(listing_url) else {
        return Vec::new();
    };
    const TITLE_SELECTORS: &[&str] = &["a.js-teaser-heading-link", "h3 a", ".o-teaser__heading a"];
    find_entries(listing_html, &base, TITLE_SELECTORS, limit)
}

async fn fetch_body(url: &str, content_selectors: &[&str], cfg: &SourceConfig) -> anyhow::Result<String> {
    let html = cfg.client.get(url).header("Accept", "text/html").send().await?.text().await?;
    Ok(extract_body_text(&html, content_selectors))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn extracts_listing_entries_and_follows_through() {
        let server = crate::testing::StubServer::start().await;
        let listing_html = format!(
            r#"<html><body><ul class="listing">
                <li><h3 class="entry-title"><a href="/a/1">Rule Change Announced</a></h3></li>
                <li><h3 class="entry-title"><a href="/a/2">Second Update</a></h3></li>
            </ul></body></html>"#
        );
        server.serve_html("/listing", listing_html).await;
        server
            .serve_html(
                "/a/1",
                r#"<html><body><article><p>Full detail of the rule change, enough words here.</p></article></body></html>"#,
            )
            .await;
        server
            .serve_html(
                "/a/2",
                r#"<html><body><article><p>Full detail of the second update.</p></article></body></html>"#,
            )
            .await;

        let cfg = SourceConfig::new().unwrap();
        let listing_url = format!("{}/listing", server.base_url());
        let spec = HtmlListingSpec {
            source_name: "Test Portal",
            listing_url: Box::leak(listing_url.into_boxed_str()),
            title_selectors: &["h3.entry-title"],
            content_selectors: &["article"],
        };

        let articles = collect_html_listing(&spec, 10, &cfg).await.unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title, "Rule Change Announced");
        assert!(articles[0].url.ends_with("/a/1"));
        assert!(articles[0].excerpt.contains("Full detail"));
    }

    #[test]
    fn dedups_repeated_links_within_one_listing_page() {
        let html = r#"<html><body>
            <h3 class="t"><a href="/x">One</a></h3>
            <h3 class="t"><a href="/x">One again</a></h3>
        </body></html>"#;
        let base = Url::parse("https://example.com/listing").unwrap();
        let entries = find_entries(html, &base, &["h3.t"], 10);
        assert_eq!(entries.len(), 1);
    }
}
