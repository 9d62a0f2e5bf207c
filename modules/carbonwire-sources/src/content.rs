//! Shared article-body extraction for HTML pages.
//!
//! A prioritized list of CSS-like selectors is tried in order; extraction
//! stops at the first selector that yields a non-empty body, and
//! `header, footer, nav, aside, script, style, noscript` are always excluded.

use std::sync::LazyLock;

use carbonwire_core::normalize;
use regex::Regex;
use scraper::{Html, Selector};

/// Element kinds stripped before any selector-based extraction runs.
const NOISE_TAGS: &[&str] = &["script", "style", "noscript", "nav", "header", "footer", "aside"];

/// A reasonable default priority list for article-body containers, used by
/// adapters that don't have (or don't yet need) a source-specific override.
pub const DEFAULT_CONTENT_SELECTORS: &[&str] =
    &["article", ".article-body", ".entry-content", ".post-content", "main", "#content"];

fn noise_stripped(html: &str) -> String {
    static PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
        NOISE_TAGS
            .iter()
            .map(|tag| Regex::new(&format!(r"(?is)<{tag}\b[^>]*>.*?</{tag}>")).expect("valid regex"))
            .collect()
    });
    let mut cleaned = html.to_string();
    for re in PATTERNS.iter() {
        cleaned = re.replace_all(&cleaned, "").into_owned();
    }
    cleaned
}

fn paragraphs_in(html: &str) -> String {
    static P_TAG: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(?is)<p\b[^>]*>(.*?)</p>").expect("valid regex"));
    let paragraphs: Vec<String> = P_TAG.captures_iter(html).map(|c| c[1].to_string()).collect();
    if paragraphs.is_empty() {
        normalize::clean(html)
    } else {
        normalize::clean_paragraphs(paragraphs)
    }
}

/// Parse `html` as a full document and extract body text from the first
/// selector (tried in order) that matches a non-empty element.
pub fn extract_body_text(html: &str, selectors: &[&str]) -> String {
    let document = Html::parse_document(html);
    for raw_selector in selectors {
        let Ok(selector) = Selector::parse(raw_selector) else {
            continue;
        };
        if let Some(element) = document.select(&selector).next() {
            let inner = noise_stripped(&element.inner_html());
            let text = paragraphs_in(&inner);
            if !text.is_empty() {
                return text;
            }
        }
    }
    String::new()
}

/// Find the first matching title element's anchor and its absolute `href`,
/// trying each selector in `title_selectors` in priority order, find
/// its anchor").
pub fn find_title_and_href(
    fragment_html: &str,
    title_selectors: &[&str],
) -> Option<(String, String)> {
    let document = Html::parse_fragment(fragment_html);
    for raw_selector in title_selectors {
        let Ok(selector) = Selector::parse(raw_selector) else {
            continue;
        };
        if let Some(title_el) = document.select(&selector).next() {
            let title = normalize::clean(&title_el.html());
            if title.is_empty() {
                continue;
            }
            // The title element itself may be the anchor, or wrap one.
            let href = title_el.value().attr("href").map(str::to_string).or_else(|| {
                let anchor_selector = Selector::parse("a[href]").ok()?;
                title_el
                    .select(&anchor_selector)
                    .next()?
                    .value()
                    .attr("href")
                    .map(str::to_string)
            });
            if let Some(href) = href {
                return Some((title, href));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_from_first_matching_selector() {
        let html = r#"
            <html><body>
                <nav>Skip this nav text</nav>
                <header>Skip header</header>
                <div class="entry-content">
                    <script>evil()</script>
                    <p>First paragraph of the article.</p>
                    <p>Second paragraph, plenty of words here for content.</p>
                </div>
                <footer>Skip footer</footer>
            </body></html>
        "#;
        let text = extract_body_text(html, DEFAULT_CONTENT_SELECTORS);
        assert!(text.contains("First paragraph"));
        assert!(text.contains("Second paragraph"));
        assert!(!text.contains("Skip"));
        assert!(!text.contains("evil"));
        assert_eq!(text, "First paragraph of the article.\n\nSecond paragraph, plenty of words here for content.");
    }

    #[test]
    fn stops_at_first_nonempty_selector() {
        let html = r#"<html><body><article></article><main><p>Real body</p></main></body></html>"#;
        let text = extract_body_text(html, &["article", "main"]);
        assert_eq!(text, "Real body");
    }

    #[test]
    fn finds_title_anchor_pair() {
        let fragment = r#"<h2 class="title"><a href="/news/123">Big Carbon Story</a></h2>"#;
        let (title, href) = find_title_and_href(fragment, &["h2.title", "h3.title"]).unwrap();
        assert_eq!(title, "Big Carbon Story");
        assert_eq!(href, "/news/123");
    }
}
