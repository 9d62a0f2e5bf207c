pub mod adapter;
pub mod adapters;
pub mod content;
pub mod dispatcher;
pub mod keywords;
pub mod modes;
pub mod registry;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use adapter::SourceAdapter;
pub use dispatcher::collect_from_sources;
pub use registry::{default_sources, lookup, DISABLED_SOURCES};
