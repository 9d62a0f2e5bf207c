//! Mode C (HTML listing + follow-through) bindings: the government,
//! regulator, registry and industry-advisory sites that publish neither a
//! feed nor a JSON API, so listing pages have to be scraped directly.

use async_trait::async_trait;
use carbonwire_core::{Article, SourceConfig};

use crate::adapter::{Category, SourceAdapter};
use crate::modes::mode_c::{collect_html_listing, HtmlListingSpec};

pub struct HtmlListingAdapter {
    pub spec: HtmlListingSpec,
}

#[async_trait]
impl SourceAdapter for HtmlListingAdapter {
    async fn collect(&self, limit: usize, cfg: &SourceConfig) -> anyhow::Result<Vec<Article>> {
        collect_html_listing(&self.spec, limit, cfg).await
    }
}

/// `(id, category, spec)`. Selector lists are deliberately short and ordered
/// most-specific-first; a portal redesign means updating one row here, not
/// writing a new adapter.
pub const HTML_LISTING_SOURCES: &[(&str, Category, HtmlListingSpec)] = &[
    (
        "eu-climate-action",
        Category::Government,
        HtmlListingSpec {
            source_name: "EU Climate Action",
            listing_url: "https://climate.ec.europa.eu/news-your-voice/news_en",
            title_selectors: &[".ecl-content-item__title", "h3 a"],
            content_selectors: &[".ecl-editor", "article", "main"],
        },
    ),
    (
        "epa-ghgrp",
        Category::Government,
        HtmlListingSpec {
            source_name: "US EPA GHG Reporting Program",
            listing_url: "https://www.epa.gov/ghgreporting/whats-new-ghg-reporting-program",
            title_selectors: &[".views-field-title a", "h3 a"],
            content_selectors: &["#main-content", "article"],
        },
    ),
    (
        "rggi",
        Category::Government,
        HtmlListingSpec {
            source_name: "Regional Greenhouse Gas Initiative",
            listing_url: "https://www.rggi.org/news",
            title_selectors: &[".news-item__title a", "h3 a"],
            content_selectors: &[".news-item__body", "article", "main"],
        },
    ),
    (
        "australia-cer",
        Category::Government,
        HtmlListingSpec {
            source_name: "Australia Clean Energy Regulator",
            listing_url: "https://cer.gov.au/latest-updates",
            title_selectors: &[".views-row h3 a", "h3 a"],
            content_selectors: &["#main-content", "article"],
        },
    ),
    (
        "uk-gov-search",
        Category::Government,
        HtmlListingSpec {
            source_name: "UK Government — carbon markets",
            listing_url: "https://www.gov.uk/search/news-and-communications?keywords=carbon+market",
            title_selectors: &[".gem-c-document-list__item-title a"],
            content_selectors: &[".govuk-govspeak", "main"],
        },
    ),
    (
        "meti-japan",
        Category::Government,
        HtmlListingSpec {
            source_name: "METI — Ministry of Economy, Trade and Industry",
            listing_url: "https://www.meti.go.jp/english/press/index.html",
            title_selectors: &[".p-release-list__item a", "li a"],
            content_selectors: &["#contents", "main"],
        },
    ),
    (
        "env-go-jp",
        Category::Government,
        HtmlListingSpec {
            source_name: "Japan Ministry of the Environment",
            listing_url: "https://www.env.go.jp/en/headline/",
            title_selectors: &[".list-news li a", "li a"],
            content_selectors: &["#contents", "main"],
        },
    ),
    (
        "keidanren",
        Category::Industry,
        HtmlListingSpec {
            source_name: "Keidanren (Japan Business Federation)",
            listing_url: "https://www.keidanren.or.jp/en/announcement.html",
            title_selectors: &[".news-list li a", "li a"],
            content_selectors: &["#contents", "main"],
        },
    ),
    (
        "verra",
        Category::Ngo,
        HtmlListingSpec {
            source_name: "Verra",
            listing_url: "https://verra.org/news/",
            title_selectors: &[".post-title a", "h3 a"],
            content_selectors: &[".entry-content", "article"],
        },
    ),
    (
        "gold-standard",
        Category::Ngo,
        HtmlListingSpec {
            source_name: "Gold Standard",
            listing_url: "https://www.goldstandard.org/news",
            title_selectors: &[".views-field-title a", "h3 a"],
            content_selectors: &[".field--name-body", "article"],
        },
    ),
    (
        "acr-american-carbon-registry",
        Category::Ngo,
        HtmlListingSpec {
            source_name: "American Carbon Registry",
            listing_url: "https://americancarbonregistry.org/news-events",
            title_selectors: &[".news-title a", "h3 a"],
            content_selectors: &["article", "main"],
        },
    ),
    (
        "car-climate-action-reserve",
        Category::Ngo,
        HtmlListingSpec {
            source_name: "Climate Action Reserve",
            listing_url: "https://www.climateactionreserve.org/category/news/",
            title_selectors: &["h2.entry-title a", "h3 a"],
            content_selectors: &[".entry-content", "article"],
        },
    ),
    (
        "climate-focus",
        Category::Ngo,
        HtmlListingSpec {
            source_name: "Climate Focus",
            listing_url: "https://climatefocus.com/news/",
            title_selectors: &[".post-title a", "h3 a"],
            content_selectors: &[".entry-content", "article"],
        },
    ),
    (
        "iisd-enb",
        Category::Ngo,
        HtmlListingSpec {
            source_name: "IISD Earth Negotiations Bulletin",
            listing_url: "https://enb.iisd.org/news",
            title_selectors: &[".node-title a", "h3 a"],
            content_selectors: &[".field--name-body", "article"],
        },
    ),
    (
        "carbon-market-watch",
        Category::Ngo,
        HtmlListingSpec {
            source_name: "Carbon Market Watch",
            listing_url: "https://carbonmarketwatch.org/news/",
            title_selectors: &[".post-title a", "h3 a"],
            content_selectors: &[".entry-content", "article"],
        },
    ),
];
