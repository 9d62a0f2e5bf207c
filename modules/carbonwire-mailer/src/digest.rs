//! Digest composition: two render modes over the same
//! `PersistedArticle` list read back from the document store.

use carbonwire_core::matches_vocabulary;
use carbonwire_store::PersistedArticle;
use chrono::{DateTime, Utc};

/// Plain-text message ready for SMTP submission.
pub struct DigestMessage {
    pub subject: String,
    pub body: String,
}

/// Render the full-summary digest: header (generated-at, count), one entry
/// per article (title, source, URL, indented AI-summary), footer.
pub fn render_full(articles: &[PersistedArticle], generated_at: DateTime<Utc>) -> DigestMessage {
    let mut body = format!(
        "Carbon market digest — generated {}\n{} article(s)\n\n",
        generated_at.to_rfc3339(),
        articles.len()
    );

    for article in articles {
        body.push_str(&format!("{}\n{} — {}\n", article.title, article.source, article.url));
        if !article.ai_summary.is_empty() {
            for line in article.ai_summary.lines() {
                body.push_str("    ");
                body.push_str(line);
                body.push('\n');
            }
        }
        body.push('\n');
    }

    body.push_str("-- generated by carbonwire\n");

    DigestMessage {
        subject: format!("Carbon market digest — {} article(s)", articles.len()),
        body,
    }
}

/// Render the short digest: drop no-summary sentinels, keep only
/// vocabulary-matching items, number the rest as `[headline, url]` pairs with
/// a 50-code-point-truncated headline.
pub fn render_short(articles: &[PersistedArticle], generated_at: DateTime<Utc>) -> DigestMessage {
    let selected: Vec<(&str, &str)> = articles
        .iter()
        .filter_map(|a| a.short_headline.as_deref().map(|h| (h, a)))
        .filter(|(headline, _)| !matches!(*headline, "-" | "−" | "—"))
        .filter(|(headline, a)| matches_vocabulary([*headline, a.ai_summary.as_str()]))
        .map(|(headline, a)| (headline, a.url.as_str()))
        .collect();

    let mut body = format!(
        "Carbon market short digest — generated {}\n{} item(s)\n\n",
        generated_at.to_rfc3339(),
        selected.len()
    );

    for (i, (headline, url)) in selected.iter().enumerate() {
        body.push_str(&format!("{}. {} — {}\n", i + 1, truncate_headline(headline), url));
    }

    DigestMessage {
        subject: format!("Carbon market short digest — {} item(s)", selected.len()),
        body,
    }
}

/// Truncate to at most 50 Unicode code points, appending `...` when cut.
fn truncate_headline(headline: &str) -> String {
    const MAX_CODE_POINTS: usize = 50;
    let chars: Vec<char> = headline.chars().collect();
    if chars.len() <= MAX_CODE_POINTS {
        return headline.to_string();
    }
    let mut truncated: String = chars[..MAX_CODE_POINTS].iter().collect();
    truncated.push_str("...");
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str, short_headline: Option<&str>, summary: &str) -> PersistedArticle {
        PersistedArticle {
            title: title.into(),
            url: format!("https://example.com/{title}"),
            source: "Test Source".into(),
            ai_summary: summary.into(),
            short_headline: short_headline.map(str::to_string),
            published_at: None,
        }
    }

    #[test]
    fn full_digest_includes_indented_summary() {
        let articles = vec![article("A", None, "line one\nline two")];
        let msg = render_full(&articles, Utc::now());
        assert!(msg.body.contains("    line one"));
        assert!(msg.body.contains("    line two"));
        assert!(msg.body.contains("1 article(s)"));
    }

    #[test]
    fn short_digest_drops_sentinel_and_nonmatching() {
        let articles = vec![
            article("No summary item", Some("—"), "carbon market news"),
            article("Irrelevant", Some("Local bakery wins award"), "no relevant keywords here"),
            article("Relevant", Some("EU tightens carbon border tax"), "details about CBAM"),
        ];
        let msg = render_short(&articles, Utc::now());
        assert!(msg.body.contains("EU tightens carbon border tax"));
        assert!(!msg.body.contains("No summary item"));
        assert!(!msg.body.contains("Irrelevant"));
        assert_eq!(msg.subject, "Carbon market short digest — 1 item(s)");
    }

    #[test]
    fn truncates_headline_by_code_points_not_bytes() {
        let headline = "脱".repeat(60); // multi-byte chars, 60 code points
        let truncated = truncate_headline(&headline);
        assert_eq!(truncated.chars().count(), 53); // 50 + "..."
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn short_headline_under_limit_is_untouched() {
        assert_eq!(truncate_headline("Short headline"), "Short headline");
    }
}
