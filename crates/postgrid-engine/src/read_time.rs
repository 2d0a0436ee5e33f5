use postgrid_types::Post;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Reading-time derivation knobs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadTimePolicy {
    pub words_per_minute: u32,
    pub min_minutes: u32,
    /// Used when a post has no content at all
    pub fallback_minutes: u32,
}

impl Default for ReadTimePolicy {
    fn default() -> Self {
        Self {
            words_per_minute: 200,
            min_minutes: 1,
            fallback_minutes: 3,
        }
    }
}

impl ReadTimePolicy {
    /// Minutes shown for `post`: the explicit value when set (and non-zero),
    /// otherwise an estimate from its content.
    pub fn minutes_for(&self, post: &Post) -> u32 {
        match post.read_time {
            Some(minutes) if minutes > 0 => minutes,
            _ => self.estimate(post.content.as_deref()),
        }
    }

    pub fn estimate(&self, content: Option<&str>) -> u32 {
        let content = match content {
            Some(c) if !c.is_empty() => c,
            _ => return self.fallback_minutes,
        };

        let words = word_count(&strip_markup(content)) as u32;
        let wpm = self.words_per_minute.max(1);
        words.div_ceil(wpm).max(self.min_minutes)
    }
}

/// Remove every `<...>` tag, keeping the text between them
pub fn strip_markup(html: &str) -> String {
    TAG_REGEX.replace_all(html, "").into_owned()
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
