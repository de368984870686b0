//! Test utilities
//!
//! Manual mock implementations, fixtures and fake upstream servers for
//! unit and router tests.

pub mod fixtures;
pub mod mocks;
pub mod upstream;

pub use fixtures::*;
pub use mocks::*;
pub use upstream::*;
