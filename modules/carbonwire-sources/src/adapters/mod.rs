//! Concrete adapter bindings: each identifier in the default source list is
//! bound here to one of the generic mode collectors in `crate::modes`, plus
//! its own endpoint/selector/vocabulary configuration. A handful of sources
//! need genuinely bespoke handling (embedded-JSON scrape, the multi-programme
//! aggregator, the cookie-gated site, the subprocess-fetched site) and get
//! their own small adapter type instead of a table row.

pub mod academic;
pub mod cookie_gated;
pub mod disabled;
pub mod embedded_scrape;
pub mod html_listing;
pub mod japanese_keyword;
pub mod oies;
pub mod rss_media;
pub mod wordpress;
