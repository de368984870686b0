//! News scraper adapter

pub mod client;

pub use client::HttpNewsClient;
