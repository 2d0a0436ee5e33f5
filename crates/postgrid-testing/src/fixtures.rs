//! Sample catalogs.

use anyhow::Result;
use postgrid_types::{Post, parse_posts};

/// Six posts over three categories. `gpu-roundup` spells its category in
/// lowercase, `android-tips` has no content, `ssd-guide` sets `readTime`.
pub const SAMPLE_POSTS: &str = include_str!("../fixtures/posts.json");

/// Posts whose fields try to inject markup
pub const HOSTILE_POSTS: &str = r#"[
  {
    "id": "xss",
    "title": "<script>alert('title')</script>",
    "summary": "\"><img src=x onerror=alert(1)>",
    "content": "<p>fine</p><script>steal()</script><iframe src=\"https://evil.example\"></iframe><a href=\"javascript:alert(1)\">click</a>",
    "image": "x\" onerror=\"alert(1)",
    "category": "<b>Hardware</b>",
    "date": "<i>today</i>"
  }
]"#;

pub fn sample_posts() -> Result<Vec<Post>> {
    Ok(parse_posts(SAMPLE_POSTS)?)
}

/// Serialize posts back to the wire format
pub fn catalog_json(posts: &[Post]) -> Result<String> {
    Ok(serde_json::to_string_pretty(posts)?)
}
