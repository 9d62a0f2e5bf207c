//! Shared HTML-to-text cleanup, used by every adapter that
//! receives HTML or HTML-flavored rendered content (WordPress `content.rendered`,
//! `content:encoded` feed fields, scraped listing/article bodies).
//!
//! Ordering is load-bearing: script blocks are removed (content and all) before
//! tag stripping, and tag stripping happens before entity decoding, so that an
//! entity-encoded `&lt;script&gt;` never gets a chance to look like a live tag.

use std::sync::LazyLock;

use regex::Regex;

static SCRIPT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script\b[^>]*>.*?</script>").expect("valid regex"));
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]+>").expect("valid regex"));
static SHORTCODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[/?[a-zA-Z][\w-]*(?:\s[^\]]*)?\]").expect("valid regex"));
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\r\n]+").expect("valid regex"));

/// Strip `<script>…</script>` blocks, including their content.
fn strip_script_blocks(html: &str) -> String {
    SCRIPT_BLOCK.replace_all(html, "").into_owned()
}

/// Strip every remaining HTML tag, keeping the text between them.
fn strip_tags(html: &str) -> String {
    TAG.replace_all(html, "").into_owned()
}

/// Strip CMS page-builder shortcodes of the shape `[tag attrs]` / `[/tag]`.
fn strip_shortcodes(text: &str) -> String {
    SHORTCODE.replace_all(text, "").into_owned()
}

/// Decode numeric and named HTML entities, including the non-ASCII range.
fn decode_entities(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}

/// Collapse runs of whitespace to a single space, trim the ends. Used for
/// single-line / inline text where paragraph structure does not matter.
pub fn clean(html: &str) -> String {
    let no_script = strip_script_blocks(html);
    let no_tags = strip_tags(&no_script);
    let no_shortcodes = strip_shortcodes(&no_tags);
    let decoded = decode_entities(&no_shortcodes);
    WHITESPACE_RUN
        .replace_all(decoded.trim(), " ")
        .into_owned()
}

/// Clean a list of already-separated paragraph strings (e.g. one per `<p>`
/// element) and join them with a blank line, preserving paragraph breaks
/// while still collapsing in-paragraph whitespace. Empty paragraphs (after
/// cleaning) are dropped.
pub fn clean_paragraphs<I, S>(paragraphs: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    paragraphs
        .into_iter()
        .map(|p| clean(p.as_ref()))
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_script_blocks_entirely() {
        let html = "<p>Keep</p><script>alert('x')</script><p>This too</p>";
        assert_eq!(clean(html), "Keep This too");
    }

    #[test]
    fn strips_tags_and_decodes_entities() {
        let html = "<p>Carbon &amp; Climate &mdash; a <b>primer</b></p>";
        assert_eq!(clean(html), "Carbon & Climate — a primer");
    }

    #[test]
    fn strips_shortcodes() {
        let html = "[vc_row][vc_column]Body text[/vc_column][/vc_row]";
        assert_eq!(clean(html), "Body text");
    }

    #[test]
    fn collapses_whitespace() {
        let html = "  Too   much \n\n   whitespace  ";
        assert_eq!(clean(html), "Too much whitespace");
    }

    #[test]
    fn idempotent() {
        let html = "<div>Carbon &amp; Climate [shortcode] <script>bad()</script>text</div>";
        let once = clean(html);
        let twice = clean(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn joins_paragraphs_with_blank_line() {
        let joined = clean_paragraphs(["<p>First</p>", "", "<p>Second</p>"]);
        assert_eq!(joined, "First\n\nSecond");
    }
}
