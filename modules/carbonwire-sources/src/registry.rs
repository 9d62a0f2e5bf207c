//! The source registry: a map from stable string identifier
//! to adapter instance plus display metadata, built once per process and
//! handed to the dispatcher. `DEFAULT_SOURCE_IDS` is the "all-free" expansion
//! used when a job is invoked with no explicit source list; `DISABLED_SOURCES`
//! lists identifiers the registry knows but `default_sources()` never yields.

use std::collections::HashMap;
use std::sync::Arc;

use crate::adapter::{Category, SourceAdapter};
use crate::adapters::academic::{
    ArxivAdapter, KeywordFilteredHtmlAdapter, NatureSubprocessAdapter, ARXIV_SOURCE, IOP_SPEC,
    NATURE_SUBSCRIBED_SOURCE, SCIENCEDIRECT_SPEC,
};
use crate::adapters::cookie_gated::{CookieGatedAdapter, FT_CLIMATE_SOURCE};
use crate::adapters::disabled;
use crate::adapters::embedded_scrape::{NedoEmbeddedAdapter, NEDO_SOURCE};
use crate::adapters::html_listing::{HtmlListingAdapter, HTML_LISTING_SOURCES};
use crate::adapters::japanese_keyword::{KeywordFilteredWordPressAdapter, JAPANESE_KEYWORD_SOURCES};
use crate::adapters::oies::{OiesAdapter, OIES_SOURCE_ID, OIES_SOURCE_NAME};
use crate::adapters::rss_media::{RssAdapter, RSS_SOURCES};
use crate::adapters::wordpress::{WordPressAdapter, WORDPRESS_SOURCES};

pub use disabled::DISABLED_SOURCES;

pub struct RegistryEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub adapter: Arc<dyn SourceAdapter>,
}

/// The full set of known sources, keyed by stable identifier. Construction is
/// cheap (every adapter is either zero-sized or a handful of static fields),
/// so `build_default()` is called fresh per job invocation rather than cached
/// behind a `OnceLock` — there is no meaningful setup cost to amortize.
pub struct Registry {
    entries: HashMap<&'static str, RegistryEntry>,
}

impl Registry {
    pub fn empty() -> Self {
        Self { entries: HashMap::new() }
    }

    pub fn insert(&mut self, entry: RegistryEntry) {
        self.entries.insert(entry.id, entry);
    }

    pub fn get(&self, id: &str) -> Option<&RegistryEntry> {
        self.entries.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }
}

/// Build the production registry: every adapter bound in `crate::adapters`,
/// including the disabled ones (resolvable via `lookup`, just never returned
/// by `default_sources()`).
pub fn build_default() -> Registry {
    let mut reg = Registry::empty();

    for (id, name, endpoint) in WORDPRESS_SOURCES {
        reg.insert(RegistryEntry {
            id,
            name,
            category: Category::Media,
            adapter: Arc::new(WordPressAdapter { name, endpoint }),
        });
    }

    for (id, name, feed_url) in RSS_SOURCES {
        reg.insert(RegistryEntry {
            id,
            name,
            category: Category::Media,
            adapter: Arc::new(RssAdapter { name, feed_url }),
        });
    }

    for (id, category, spec) in HTML_LISTING_SOURCES {
        reg.insert(RegistryEntry {
            id,
            name: spec.source_name,
            category: *category,
            adapter: Arc::new(HtmlListingAdapter { spec: *spec }),
        });
    }

    for (id, name, endpoint) in JAPANESE_KEYWORD_SOURCES {
        reg.insert(RegistryEntry {
            id,
            name,
            category: Category::Media,
            adapter: Arc::new(KeywordFilteredWordPressAdapter { name, endpoint }),
        });
    }

    let (arxiv_id, arxiv_name, arxiv_endpoint) = ARXIV_SOURCE;
    reg.insert(RegistryEntry {
        id: arxiv_id,
        name: arxiv_name,
        category: Category::Academic,
        adapter: Arc::new(ArxivAdapter { name: arxiv_name, query_endpoint: arxiv_endpoint }),
    });

    let (nature_id, nature_feed_url) = NATURE_SUBSCRIBED_SOURCE;
    let nature_name = "Nature Climate Change";
    reg.insert(RegistryEntry {
        id: nature_id,
        name: nature_name,
        category: Category::Academic,
        adapter: Arc::new(NatureSubprocessAdapter { name: nature_name, feed_url: nature_feed_url }),
    });

    reg.insert(RegistryEntry {
        id: "iop-environmental-research",
        name: IOP_SPEC.source_name,
        category: Category::Academic,
        adapter: Arc::new(KeywordFilteredHtmlAdapter { spec: IOP_SPEC }),
    });

    reg.insert(RegistryEntry {
        id: "sciencedirect-energy-policy",
        name: SCIENCEDIRECT_SPEC.source_name,
        category: Category::Academic,
        adapter: Arc::new(KeywordFilteredHtmlAdapter { spec: SCIENCEDIRECT_SPEC }),
    });

    let (ft_id, ft_name, ft_listing_url) = FT_CLIMATE_SOURCE;
    reg.insert(RegistryEntry {
        id: ft_id,
        name: ft_name,
        category: Category::Media,
        adapter: Arc::new(CookieGatedAdapter { name: ft_name, listing_url: ft_listing_url }),
    });

    let (nedo_id, nedo_listing_url) = NEDO_SOURCE;
    let nedo_name = "NEDO (New Energy and Industrial Technology Development Organization)";
    reg.insert(RegistryEntry {
        id: nedo_id,
        name: nedo_name,
        category: Category::Government,
        adapter: Arc::new(NedoEmbeddedAdapter { name: nedo_name, listing_url: nedo_listing_url }),
    });

    reg.insert(RegistryEntry {
        id: OIES_SOURCE_ID,
        name: OIES_SOURCE_NAME,
        category: Category::Academic,
        adapter: Arc::new(OiesAdapter),
    });

    for (id, reason) in DISABLED_SOURCES {
        let _ = reason; // documented for operators; not attached to the entry itself
        reg.insert(RegistryEntry {
            id,
            name: id,
            category: Category::Media,
            adapter: Arc::new(DisabledAdapter),
        });
    }

    reg
}

/// A disabled source's registry entry exists so `lookup` can explain *why*
/// it's unavailable rather than reporting "unknown source"; it never runs.
struct DisabledAdapter;

#[async_trait::async_trait]
impl SourceAdapter for DisabledAdapter {
    async fn collect(&self, _limit: usize, _cfg: &carbonwire_core::SourceConfig) -> anyhow::Result<Vec<carbonwire_core::Article>> {
        anyhow::bail!("source is disabled; see registry::DISABLED_SOURCES for the reason")
    }
}

/// Every non-disabled identifier, in registration order. This is the list
/// used when a job is invoked with `sources: "all-free"`.
pub const DEFAULT_SOURCE_IDS: &[&str] = &[
    "carbon-herald",
    "carbon-pulse",
    "quantum-commodity-intelligence",
    "energy-monitor",
    "edie",
    "current-climate-news",
    "carbon-markets-daily",
    "greentech-media-carbon",
    "politico-energy",
    "euractiv-climate",
    "climate-home-news",
    "mongabay-carbon",
    "desmog",
    "reuters-sustainable-business",
    "eu-climate-action",
    "epa-ghgrp",
    "rggi",
    "australia-cer",
    "uk-gov-search",
    "meti-japan",
    "env-go-jp",
    "keidanren",
    "verra",
    "gold-standard",
    "acr-american-carbon-registry",
    "car-climate-action-reserve",
    "climate-focus",
    "iisd-enb",
    "carbon-market-watch",
    "nikkei-keyword",
    "asahi-keyword",
    "yomiuri-keyword",
    "mainichi-keyword",
    "arxiv-econ-gn",
    "nature-climate-change-subprocess",
    "iop-environmental-research",
    "sciencedirect-energy-policy",
    "ft-climate-cookie",
    "nedo-embedded",
    "oies-programmes",
];

pub fn default_sources() -> Vec<String> {
    DEFAULT_SOURCE_IDS.iter().map(|s| s.to_string()).collect()
}

/// Resolve one identifier against the production registry. Returns `None`
/// for anything not known at all; disabled-but-known identifiers resolve to
/// an entry whose adapter always errors (see [`DisabledAdapter`]).
pub fn lookup(id: &str) -> Option<RegistryEntry> {
    build_default().entries.remove(id)
}
