//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub(crate) mod http;
pub mod news;
pub mod pandascore;
pub mod storage;

pub use news::HttpNewsClient;
pub use pandascore::PandascoreClient;
pub use storage::FileKeyValueStore;
