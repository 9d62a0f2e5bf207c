//! Error kinds for the digest mailer.

pub type Result<T> = std::result::Result<T, MailerError>;

#[derive(Debug, thiserror::Error)]
pub enum MailerError {
    /// The store couldn't be queried at all; escalates to the job.
    #[error("fetching recent articles: {0}")]
    StoreQuery(#[from] carbonwire_store::StoreError),

    /// A send with zero matching articles.
    #[error("no articles matched the digest filters")]
    EmptyDigest,

    /// Terminal SMTP failure after exhausting retries; escalates to the job
    /// as a 500.
    #[error("submitting digest after retries: {0}")]
    SendFailed(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
