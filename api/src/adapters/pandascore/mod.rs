//! Pandascore adapter
//!
//! Upcoming matches and team rosters from the third-party provider.

pub mod client;

pub use client::PandascoreClient;
