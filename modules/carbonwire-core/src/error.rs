//! Error kinds layered the way `rootsignal-archive::error` layers its
//! `ArchiveError`: a small named enum for the cases callers branch on, with
//! an `Other` catch-all for everything else.

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Transport error kind: request failed, timed out, or returned non-2xx.
    #[error("transport error fetching {url}: {message}")]
    Transport { url: String, message: String },

    /// Parse error kind, treated as transport-level by the dispatcher.
    #[error("parse error in {source_name}: {message}")]
    Parse { source_name: String, message: String },

    /// Bot-challenge response kind: 200 OK but the body is a JS challenge page.
    #[error("bot challenge detected fetching {url}")]
    BotChallenge { url: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
