//! Data models
//!
//! A Pinboard tag together with how many bookmarks carry it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};

/// A tag and its use count
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Tag {
    /// Tag name, unique within one listing
    pub name: String,
    /// Number of bookmarks tagged with it
    #[serde(rename = "count")]
    pub use_count: u64,
}

impl Tag {
    /// Create a new tag
    pub fn new(name: impl Into<String>, use_count: u64) -> Self {
        Self {
            name: name.into(),
            use_count,
        }
    }

    /// Get the tag name
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.use_count)
    }
}

/// Parse the body of a tag listing
///
/// The service answers with a JSON object mapping each tag name to its use
/// count as a decimal string, e.g. `{"go": "3", "rust": "12"}`. Fails as a
/// whole if any count is not a non-negative integer.
pub fn parse_tag_counts(body: &str) -> ApiResult<Vec<Tag>> {
    let raw: BTreeMap<String, String> = serde_json::from_str(body)?;

    raw.into_iter()
        .map(|(name, value)| match value.parse::<u64>() {
            Ok(use_count) => Ok(Tag { name, use_count }),
            Err(source) => Err(ApiError::UseCount {
                tag: name,
                value,
                source,
            }),
        })
        .collect()
}
