//! The uniform source-adapter contract.
//!
//! The registry holds map entries bound to a tiny single-method interface —
//! no inheritance, the contract is structural: anything implementing
//! [`SourceAdapter`] can be registered.

use async_trait::async_trait;
use carbonwire_core::{Article, SourceConfig};

/// One per external source. Implementations must uphold this contract:
/// - return at most `limit` articles
/// - return `Ok(vec![])` (not an error) when the source is reachable but has
///   nothing qualifying — distinguishing "nothing to report" from "broken"
///   is what the dispatcher's error aggregation depends on
/// - never panic: turn transport/parse/decode failures into `Err`
/// - retain no state across calls, never mutate `cfg`
/// - populate `source` with a stable human label and nothing else beyond
///   the fields in `Article`
/// - return only absolute URLs
#[async_trait]
pub trait SourceAdapter: Send + Sync {
    async fn collect(&self, limit: usize, cfg: &SourceConfig) -> anyhow::Result<Vec<Article>>;
}

/// Static metadata carried alongside a collector function for reporting,
/// immutable for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Media,
    Government,
    Ngo,
    Academic,
    Industry,
}
