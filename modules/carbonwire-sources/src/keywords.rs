//! Re-exports the shared carbon vocabulary from `carbonwire-core` (used by
//! adapters that must run a keyword filter before emitting records: Japanese
//! general-news sources whose carbon content is a small fraction of total
//! output, and broad academic journals). Kept as its own module here, rather
//! than making every adapter depend on `carbonwire_core::vocabulary`
//! directly, since the adapters already reach for things through
//! `crate::keywords`.

pub use carbonwire_core::vocabulary::{matches_vocabulary, CARBON_VOCABULARY};
