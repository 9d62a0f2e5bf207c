pub mod blocks;
pub mod collection_id;
pub mod error;
pub mod record;
pub mod store;

#[cfg(any(test, feature = "test-support"))]
pub mod fake;

pub use error::StoreError;
pub use record::{PersistableArticle, PersistedArticle, RecordKind};
pub use store::{DocumentStore, HttpDocumentStore};
