//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod esports_service;
pub mod forum_service;
pub mod forum_store;
pub mod interleaver;
pub mod news_service;
pub mod seed;

pub use esports_service::EsportsService;
pub use forum_service::{ForumService, TopicDetail};
pub use forum_store::ReplyOutcome;
pub use interleaver::Headlines;
pub use news_service::NewsService;
pub use seed::SeedCatalog;
