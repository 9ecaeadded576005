use serde::{Deserialize, Serialize};

/// A display name and the link it points at.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NameUrlPair {
    pub name: String,
    pub url: String,
}

impl NameUrlPair {
    /// Build a pair, trimming surrounding whitespace from both fields
    pub fn new(name: &str, url: &str) -> Self {
        NameUrlPair {
            name: name.trim().to_string(),
            url: url.trim().to_string(),
        }
    }
}
