//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod esports;
pub mod news;
pub mod storage;

pub use esports::{EsportsClient, MatchQuery, TeamQuery};
pub use news::NewsClient;
pub use storage::{custom_topics_key, replies_key, KeyValueStore};
