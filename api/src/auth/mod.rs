//! Request authentication
//!
//! Identity resolution for forum authorship.

pub mod identity;

pub use identity::identity_middleware;
