//! Identity of the user behind a request

use serde::{Deserialize, Serialize};

/// Author name used when nobody is signed in
pub const GUEST_AUTHOR: &str = "Guest";

/// Who is performing an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Identity {
    Authenticated { name: String },
    Guest,
}

impl Identity {
    /// Resolve an identity from an optional display name; blank names are guests
    pub fn from_name(name: Option<&str>) -> Self {
        match name.map(str::trim) {
            Some(name) if !name.is_empty() => Identity::Authenticated {
                name: name.to_string(),
            },
            _ => Identity::Guest,
        }
    }

    /// Name to record as the author of a topic or reply
    pub fn author_name(&self) -> &str {
        match self {
            Identity::Authenticated { name } => name,
            Identity::Guest => GUEST_AUTHOR,
        }
    }
}
