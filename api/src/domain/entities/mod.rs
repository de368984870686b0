//! Domain entities
//!
//! Pure domain models representing core business concepts.

pub mod esports;
pub mod forum;
pub mod game;
pub mod identity;
pub mod news;

pub use esports::{Match, Team};
pub use forum::{ForumReply, ForumTopic, TopicOrigin};
pub use game::Game;
pub use identity::{Identity, GUEST_AUTHOR};
pub use news::NewsArticle;
