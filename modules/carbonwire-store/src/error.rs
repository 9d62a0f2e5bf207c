//! Error kinds for the document-store writer, layered the
//! same way as [`carbonwire_core::error::CoreError`].

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store client could not be constructed at all (missing/invalid
    /// token). This is the one writer failure the job escalates on.
    #[error("failed to initialize document-store client: {0}")]
    ClientInit(String),

    /// Per-article write failure: logged by the caller and
    /// skipped, never propagated out of a batch.
    #[error("writing article {title:?}: {message}")]
    WriteFailed { title: String, message: String },

    #[error("querying recent pages: {0}")]
    QueryFailed(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
