//! Render module
//!
//! Plain-text rendering for terminal and widget clients.

pub mod renderer;

pub use renderer::{render_headlines, render_topics};
