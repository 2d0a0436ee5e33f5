use crate::Result;
use serde::{Deserialize, Serialize};

/// A single blog post as published in the catalog resource.
///
/// Records are read-only: they are parsed from the catalog on every page load
/// and never mutated afterwards. `id` is the lookup key and the routing
/// identifier; uniqueness is assumed but not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub summary: String,
    /// Rich text body (HTML). Absent content falls back to a fixed read time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub image: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    pub date: String,
    /// Explicit reading time in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl Post {
    /// Lowercased category, the key used for every category comparison
    pub fn category_key(&self) -> String {
        self.category.to_lowercase()
    }

    /// Case-insensitive category match
    pub fn is_in_category(&self, category: &str) -> bool {
        self.category_key() == category.to_lowercase()
    }
}

/// Parse a catalog payload: a JSON array of post records.
///
/// Any other shape (object, missing required field, wrong type) is rejected as
/// a whole; callers decide how to degrade.
pub fn parse_posts(payload: &str) -> Result<Vec<Post>> {
    let posts: Vec<Post> = serde_json::from_str(payload)?;
    Ok(posts)
}

/// Parse a catalog payload from raw bytes (HTTP bodies).
pub fn parse_posts_slice(payload: &[u8]) -> Result<Vec<Post>> {
    let posts: Vec<Post> = serde_json::from_slice(payload)?;
    Ok(posts)
}
