pub mod article;
pub mod dates;
pub mod dedup;
pub mod error;
pub mod freshness;
pub mod http;
pub mod normalize;
pub mod vocabulary;

pub use article::{Article, CollectionResult};
pub use error::CoreError;
pub use http::SourceConfig;
pub use vocabulary::{matches_vocabulary, CARBON_VOCABULARY};
